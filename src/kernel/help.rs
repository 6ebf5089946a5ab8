//! kernel::help
//!
//! Built-in default command: a help listing over the booted command set.
//! Supplied when the embedder never registers a default of its own.

use anyhow::Result;
use async_trait::async_trait;

use crate::command::{constructor, Command, CommandConstructor};
use crate::descriptor::CommandMetaData;
use crate::parser::ParsedOutput;
use crate::ui::{render_tables, PlainColors, Table};

use super::Kernel;

/// Metadata plus constructor for the built-in help listing.
pub(super) fn builtin_default() -> (CommandMetaData, CommandConstructor) {
    let meta = CommandMetaData {
        command_name: "help".to_string(),
        description: "List all available commands".to_string(),
        help: None,
        args: Vec::new(),
        flags: Vec::new(),
        aliases: Vec::new(),
    };
    (meta, constructor(|| HelpCommand))
}

/// Renders the command listing, one table per namespace, sharing a single
/// option-column width so sections align.
struct HelpCommand;

impl HelpCommand {
    fn listing(kernel: &Kernel) -> String {
        let mut root = Table::new("Available commands");
        let mut sections: Vec<Table> = kernel
            .namespaces()
            .iter()
            .map(|namespace| Table::new(namespace.clone()))
            .collect();

        for meta in kernel.commands() {
            let mut label = meta.command_name.clone();
            if !meta.aliases.is_empty() {
                label.push_str(&format!(" ({})", meta.aliases.join(", ")));
            }
            let row = (label, meta.description.clone());

            match meta.namespace() {
                Some(namespace) => {
                    if let Some(section) = sections
                        .iter_mut()
                        .find(|section| section.heading == namespace)
                    {
                        section.rows.push(row);
                    }
                }
                None => root.rows.push(row),
            }
        }

        let mut tables = vec![root];
        tables.extend(sections);
        render_tables(&tables, &PlainColors)
    }
}

#[async_trait]
impl Command for HelpCommand {
    async fn run(&mut self, kernel: &Kernel, _parsed: ParsedOutput) -> Result<()> {
        println!("{}", Self::listing(kernel));
        Ok(())
    }
}
