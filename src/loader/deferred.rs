//! loader::deferred
//!
//! Deferred-factory loader: a zero-argument function producing (possibly
//! asynchronously) a concrete loader instance, resolved and cached once it
//! first succeeds. Every query after resolution delegates to the cached
//! instance; a failed resolution leaves the factory in place, so a retried
//! boot runs it again.

use std::future::Future;
use std::pin::Pin;

use async_trait::async_trait;
use tokio::sync::OnceCell;

use crate::command::CommandConstructor;
use crate::descriptor::CommandMetaData;

use super::{Loader, LoaderError};

/// Future returned by a loader factory.
pub type LoaderFut = Pin<Box<dyn Future<Output = Result<Box<dyn Loader>, LoaderError>> + Send>>;

/// A zero-argument factory producing a loader. Invoked again after a failed
/// resolution, never after a successful one.
pub type LoaderFactory = Box<dyn Fn() -> LoaderFut + Send + Sync>;

/// Loader that materializes its backing source on first use.
pub struct DeferredLoader {
    factory: LoaderFactory,
    cell: OnceCell<Box<dyn Loader>>,
}

impl DeferredLoader {
    /// Wrap a factory. The factory runs until it first succeeds; the
    /// resolved loader is cached from then on.
    pub fn new(factory: impl Fn() -> LoaderFut + Send + Sync + 'static) -> Self {
        Self {
            factory: Box::new(factory),
            cell: OnceCell::new(),
        }
    }

    /// Resolve the backing loader, running the factory if no prior call
    /// has succeeded.
    async fn resolved(&self) -> Result<&dyn Loader, LoaderError> {
        let loader = self.cell.get_or_try_init(|| (self.factory)()).await?;
        Ok(loader.as_ref())
    }
}

impl std::fmt::Debug for DeferredLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeferredLoader")
            .field("resolved", &self.cell.initialized())
            .finish()
    }
}

#[async_trait]
impl Loader for DeferredLoader {
    async fn metadata(&self) -> Result<Vec<CommandMetaData>, LoaderError> {
        self.resolved().await?.metadata().await
    }

    async fn command(
        &self,
        meta: &CommandMetaData,
    ) -> Result<Option<CommandConstructor>, LoaderError> {
        self.resolved().await?.command(meta).await
    }
}
