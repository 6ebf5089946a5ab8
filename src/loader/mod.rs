//! loader
//!
//! Pluggable sources of command metadata and constructors.
//!
//! # Design
//!
//! A [`Loader`] answers two questions: what commands exist
//! ([`Loader::metadata`]) and how to materialize one
//! ([`Loader::command`]). Both are async because a source may perform I/O
//! (reading an index file, importing command code on demand). The kernel
//! queries loaders sequentially in registration order, so a loader never
//! needs internal synchronization for boot.
//!
//! # Implementations
//!
//! - [`ListLoader`] - in-memory list of metadata/constructor pairs
//! - [`IndexLoader`] - metadata from a persisted JSON index document
//! - [`DeferredLoader`] - zero-argument async factory, resolved and cached on
//!   first success; a failed resolution is retried on the next query
//!
//! Loader-specific failures propagate unchanged to the caller of `boot()`;
//! the core never swallows them.

mod deferred;
mod index;
mod list;

pub use deferred::{DeferredLoader, LoaderFactory, LoaderFut};
pub use index::{CommandIndex, IndexLoader, IndexResolver, INDEX_VERSION};
pub use list::ListLoader;

use async_trait::async_trait;
use thiserror::Error;

use crate::command::CommandConstructor;
use crate::descriptor::CommandMetaData;

/// Errors from loader operations.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// Reading a command source failed.
    #[error("failed to read command source: {0}")]
    Io(#[from] std::io::Error),

    /// A persisted index document did not parse.
    #[error("malformed command index: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A persisted index document carries a version this build cannot read.
    #[error("unsupported command index version {0}")]
    UnsupportedIndexVersion(u32),

    /// Loader-specific failure, propagated unchanged.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// A source of command metadata and constructors.
#[async_trait]
pub trait Loader: Send + Sync {
    /// List every command this source provides.
    async fn metadata(&self) -> Result<Vec<CommandMetaData>, LoaderError>;

    /// Materialize the constructor for a metadata entry, or `None` when this
    /// source does not own the command.
    async fn command(
        &self,
        meta: &CommandMetaData,
    ) -> Result<Option<CommandConstructor>, LoaderError>;
}
