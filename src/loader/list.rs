//! loader::list
//!
//! In-memory loader over a static list of commands.

use async_trait::async_trait;

use crate::command::CommandConstructor;
use crate::descriptor::CommandMetaData;

use super::{Loader, LoaderError};

/// Loader backed by an in-memory list of metadata/constructor pairs.
///
/// The simplest source: commands registered programmatically at startup.
pub struct ListLoader {
    entries: Vec<(CommandMetaData, CommandConstructor)>,
}

impl ListLoader {
    /// Create an empty loader.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a command.
    pub fn add(mut self, meta: CommandMetaData, ctor: CommandConstructor) -> Self {
        self.entries.push((meta, ctor));
        self
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the loader is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ListLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ListLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListLoader")
            .field("entries", &self.entries.len())
            .finish()
    }
}

#[async_trait]
impl Loader for ListLoader {
    async fn metadata(&self) -> Result<Vec<CommandMetaData>, LoaderError> {
        Ok(self.entries.iter().map(|(meta, _)| meta.clone()).collect())
    }

    async fn command(
        &self,
        meta: &CommandMetaData,
    ) -> Result<Option<CommandConstructor>, LoaderError> {
        Ok(self
            .entries
            .iter()
            .find(|(own, _)| own.command_name == meta.command_name)
            .map(|(_, ctor)| ctor.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::constructor;
    use crate::kernel::Kernel;
    use crate::parser::ParsedOutput;

    struct Noop;

    #[async_trait]
    impl crate::command::Command for Noop {
        async fn run(&mut self, _kernel: &Kernel, _parsed: ParsedOutput) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn meta(name: &str) -> CommandMetaData {
        CommandMetaData::builder(name).build().unwrap()
    }

    #[tokio::test]
    async fn metadata_preserves_registration_order() {
        let loader = ListLoader::new()
            .add(meta("make:model"), constructor(|| Noop))
            .add(meta("make:controller"), constructor(|| Noop));

        let metas = loader.metadata().await.unwrap();
        let names: Vec<_> = metas.iter().map(|m| m.command_name.as_str()).collect();
        assert_eq!(names, vec!["make:model", "make:controller"]);
    }

    #[tokio::test]
    async fn command_matches_by_name() {
        let loader = ListLoader::new().add(meta("serve"), constructor(|| Noop));

        assert!(loader.command(&meta("serve")).await.unwrap().is_some());
        assert!(loader.command(&meta("other")).await.unwrap().is_none());
    }
}
