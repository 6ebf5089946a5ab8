//! loader::index
//!
//! Loader over a persisted command index document.
//!
//! # Format
//!
//! The index is produced by an external generator and read here:
//!
//! ```json
//! {
//!   "version": 1,
//!   "commands": [ { "commandName": "make:model", ... } ]
//! }
//! ```
//!
//! The index carries metadata only. Constructors come from an optional
//! resolver closure (the companion lazy-loading stub); without one, this
//! loader answers metadata queries and reports every command as not
//! materializable here.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::command::CommandConstructor;
use crate::descriptor::CommandMetaData;

use super::{Loader, LoaderError};

/// The index document version this build can read.
pub const INDEX_VERSION: u32 = 1;

/// The persisted index artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandIndex {
    /// Document schema version.
    pub version: u32,
    /// Command metadata entries, in generator order.
    pub commands: Vec<CommandMetaData>,
}

impl CommandIndex {
    /// Wrap metadata entries in a current-version document.
    pub fn new(commands: Vec<CommandMetaData>) -> Self {
        Self {
            version: INDEX_VERSION,
            commands,
        }
    }
}

/// Maps a metadata entry to its constructor, if this stub owns it.
pub type IndexResolver = Arc<dyn Fn(&CommandMetaData) -> Option<CommandConstructor> + Send + Sync>;

/// Loader backed by an on-disk JSON index.
pub struct IndexLoader {
    path: PathBuf,
    resolver: Option<IndexResolver>,
}

impl IndexLoader {
    /// Create a loader reading the index at `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            resolver: None,
        }
    }

    /// Attach the companion stub that materializes constructors.
    pub fn with_resolver(
        mut self,
        resolver: impl Fn(&CommandMetaData) -> Option<CommandConstructor> + Send + Sync + 'static,
    ) -> Self {
        self.resolver = Some(Arc::new(resolver));
        self
    }
}

impl std::fmt::Debug for IndexLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexLoader")
            .field("path", &self.path)
            .field("resolver", &self.resolver.is_some())
            .finish()
    }
}

#[async_trait]
impl Loader for IndexLoader {
    async fn metadata(&self) -> Result<Vec<CommandMetaData>, LoaderError> {
        let raw = std::fs::read_to_string(&self.path)?;
        let index: CommandIndex = serde_json::from_str(&raw)?;
        if index.version != INDEX_VERSION {
            return Err(LoaderError::UnsupportedIndexVersion(index.version));
        }
        Ok(index.commands)
    }

    async fn command(
        &self,
        meta: &CommandMetaData,
    ) -> Result<Option<CommandConstructor>, LoaderError> {
        Ok(self.resolver.as_ref().and_then(|resolve| resolve(meta)))
    }
}
