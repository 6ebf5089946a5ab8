//! command
//!
//! The executable side of a command.
//!
//! The core orchestrates metadata; it does not own command behavior. What a
//! loader hands back for a metadata entry is a [`CommandConstructor`]: a
//! cheap, cloneable factory producing a fresh [`Command`] instance per
//! dispatch. Dispatch itself is synchronous from the kernel's point of view,
//! one command per invocation.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::kernel::Kernel;
use crate::parser::ParsedOutput;

/// An executable command instance.
///
/// Implementations receive the booted kernel (for lookups, namespaces, and
/// help rendering) and the fully bound [`ParsedOutput`]. Presence validation
/// is the implementation's decision; see [`crate::validate`].
#[async_trait]
pub trait Command: Send {
    /// Execute the command.
    async fn run(&mut self, kernel: &Kernel, parsed: ParsedOutput) -> Result<()>;
}

/// A constructor reference returned by loaders: builds a fresh command
/// instance for each dispatch.
pub type CommandConstructor = Arc<dyn Fn() -> Box<dyn Command> + Send + Sync>;

/// Wrap a plain factory function into a [`CommandConstructor`].
///
/// # Example
///
/// ```
/// use anyhow::Result;
/// use async_trait::async_trait;
/// use tiller::command::{constructor, Command};
/// use tiller::kernel::Kernel;
/// use tiller::parser::ParsedOutput;
///
/// struct Greet;
///
/// #[async_trait]
/// impl Command for Greet {
///     async fn run(&mut self, _kernel: &Kernel, _parsed: ParsedOutput) -> Result<()> {
///         Ok(())
///     }
/// }
///
/// let ctor = constructor(|| Greet);
/// let _instance = ctor();
/// ```
pub fn constructor<C, F>(factory: F) -> CommandConstructor
where
    C: Command + 'static,
    F: Fn() -> C + Send + Sync + 'static,
{
    Arc::new(move || Box::new(factory()))
}
