//! Tiller - a framework core for building command-line applications
//!
//! Tiller turns a declarative "signature" description of a command's
//! expected arguments and flags into typed descriptors, converts raw process
//! argument vectors into validated, typed values, and orchestrates a
//! registry of commands through a lazy-loading, boot-once lifecycle.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`descriptor`] - Immutable value records for arguments, flags, and
//!   command metadata
//! - [`signature`] - Parser for the signature mini-language
//! - [`parser`] - Tokenizer and argument binder (argv to [`parser::ParsedOutput`])
//! - [`loader`] - Pluggable sources of command metadata and constructors
//! - [`kernel`] - Command registry, boot state machine, lookup and dispatch
//!   resolution
//! - [`command`] - The executable command trait and constructor references
//! - [`validate`] - Presence and type enforcement for the execution layer
//! - [`template`] - Help-text placeholder interpolation
//! - [`ui`] - Pure formatters from descriptors to display text
//!
//! # Correctness Invariants
//!
//! 1. Descriptors are produced once, at definition time, and never mutated
//! 2. The kernel's boot transition is monotonic and transactional
//! 3. Loaders are queried sequentially in registration order, so the merged
//!    command list is deterministic
//! 4. The binder resolves values but never enforces presence; validation is
//!    a separate, explicit step
//!
//! # Example
//!
//! ```
//! use tiller::command::constructor;
//! use tiller::descriptor::CommandMetaData;
//! use tiller::kernel::Kernel;
//! use tiller::loader::ListLoader;
//! use tiller::signature::parse_signature;
//! # use anyhow::Result;
//! # use async_trait::async_trait;
//! # struct Greet;
//! # #[async_trait]
//! # impl tiller::command::Command for Greet {
//! #     async fn run(&mut self, _k: &Kernel, _p: tiller::parser::ParsedOutput) -> Result<()> {
//! #         Ok(())
//! #     }
//! # }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<()> {
//! let signature = parse_signature("{name} {--force}")?;
//! let mut builder = CommandMetaData::builder("greet:hello")
//!     .description("Say hello");
//! for arg in signature.args {
//!     builder = builder.arg(arg);
//! }
//! for flag in signature.flags {
//!     builder = builder.flag(flag);
//! }
//! let meta = builder.build()?;
//!
//! let mut kernel = Kernel::new();
//! kernel.add_loader(ListLoader::new().add(meta, constructor(|| Greet)))?;
//! kernel.boot().await?;
//!
//! let meta = kernel.find_command("greet:hello")?;
//! let argv = vec!["World".to_string(), "--force".to_string()];
//! let parsed = kernel.parse(meta, &argv);
//! assert_eq!(parsed.arg(0).and_then(|v| v.as_str()), Some("World"));
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod descriptor;
pub mod kernel;
pub mod loader;
pub mod parser;
pub mod signature;
pub mod template;
pub mod ui;
pub mod validate;

pub use command::{constructor, Command, CommandConstructor};
pub use descriptor::{
    ArgKind, ArgValue, ArgumentDescriptor, CommandMetaData, DescriptorError, FlagDescriptor,
    FlagKind, FlagValue,
};
pub use kernel::{Kernel, KernelError, KernelState};
pub use loader::{DeferredLoader, IndexLoader, ListLoader, Loader, LoaderError};
pub use parser::{bind, tokenize, FlagUniverse, ParsedOutput};
pub use signature::{parse_signature, ParsedSignature, SignatureError};
pub use template::{interpolate, TemplateError};
pub use validate::{validate, ValidateError};
