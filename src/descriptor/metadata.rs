//! descriptor::metadata
//!
//! Command metadata and its builder.
//!
//! # Design
//!
//! Decorator-style field declaration from dynamic-language command frameworks
//! re-architects here as an explicit builder: a command type's static
//! definition appends descriptors to an ordered sequence owned by that type.
//! Inheritance of declared descriptors is an explicit copy of the parent's
//! sequences ([`CommandMetaDataBuilder::inherit`]) before the child appends
//! its own entries, avoiding any dynamic lookup-chain walk.

use serde::{Deserialize, Serialize};

use super::argument::{ArgKind, ArgumentDescriptor};
use super::flag::FlagDescriptor;
use super::DescriptorError;

/// Long-form help text for a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Help {
    /// A single block of text.
    Text(String),
    /// An ordered sequence of lines, joined for display.
    Lines(Vec<String>),
}

impl Help {
    /// Flatten to display lines.
    pub fn lines(&self) -> Vec<&str> {
        match self {
            Help::Text(text) => text.lines().collect(),
            Help::Lines(lines) => lines.iter().map(String::as_str).collect(),
        }
    }
}

/// A command's full metadata: immutable once built.
///
/// Command names follow the `namespace:action` form; the substring before
/// the first `:` is the command's namespace.
///
/// ```
/// use tiller::descriptor::{ArgumentDescriptor, CommandMetaData};
///
/// let meta = CommandMetaData::builder("make:model")
///     .description("Scaffold a new model")
///     .alias("mm")
///     .arg(ArgumentDescriptor::new("name"))
///     .build()
///     .unwrap();
///
/// assert_eq!(meta.namespace(), Some("make"));
/// assert_eq!(meta.args.len(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandMetaData {
    /// Command name in `namespace:action` form.
    pub command_name: String,
    /// One-line description for listings.
    #[serde(default)]
    pub description: String,
    /// Long-form help text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<Help>,
    /// Declared positional arguments, in declaration order.
    #[serde(default)]
    pub args: Vec<ArgumentDescriptor>,
    /// Declared flags, in declaration order.
    #[serde(default)]
    pub flags: Vec<FlagDescriptor>,
    /// Alternate names this command answers to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl CommandMetaData {
    /// Start building metadata for the named command.
    pub fn builder(command_name: impl Into<String>) -> CommandMetaDataBuilder {
        CommandMetaDataBuilder::new(command_name)
    }

    /// The namespace portion of the command name: the substring before the
    /// first `:`, or `None` for un-namespaced commands.
    pub fn namespace(&self) -> Option<&str> {
        self.command_name
            .split_once(':')
            .map(|(namespace, _)| namespace)
    }
}

/// Fluent constructor for [`CommandMetaData`].
///
/// Structural invariants are checked at [`build`](Self::build) time so that
/// declaration reads as a flat chain.
#[derive(Debug, Clone, Default)]
pub struct CommandMetaDataBuilder {
    command_name: String,
    description: String,
    help: Option<Help>,
    args: Vec<ArgumentDescriptor>,
    flags: Vec<FlagDescriptor>,
    aliases: Vec<String>,
}

impl CommandMetaDataBuilder {
    fn new(command_name: impl Into<String>) -> Self {
        Self {
            command_name: command_name.into(),
            ..Self::default()
        }
    }

    /// Set the one-line description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the long-form help as a single text block.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(Help::Text(help.into()));
        self
    }

    /// Set the long-form help as ordered lines.
    pub fn help_lines(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.help = Some(Help::Lines(lines.into_iter().map(Into::into).collect()));
        self
    }

    /// Append a positional argument.
    pub fn arg(mut self, arg: ArgumentDescriptor) -> Self {
        self.args.push(arg);
        self
    }

    /// Append a flag.
    pub fn flag(mut self, flag: FlagDescriptor) -> Self {
        self.flags.push(flag);
        self
    }

    /// Add an alias.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Copy a parent command's declared descriptors before appending this
    /// command's own. Parse hooks are carried over.
    pub fn inherit(mut self, parent: &CommandMetaData) -> Self {
        self.args.extend(parent.args.iter().cloned());
        self.flags.extend(parent.flags.iter().cloned());
        self
    }

    /// Finish, validating the structural invariants.
    ///
    /// # Errors
    ///
    /// - [`DescriptorError::EmptyCommandName`] if the name is empty
    /// - [`DescriptorError::MultipleSpread`] if more than one spread argument
    ///   is declared
    /// - [`DescriptorError::SpreadNotLast`] if a spread argument is followed
    ///   by another argument
    /// - [`DescriptorError::DuplicateFlag`] if two flags share a name
    pub fn build(self) -> Result<CommandMetaData, DescriptorError> {
        if self.command_name.is_empty() {
            return Err(DescriptorError::EmptyCommandName);
        }

        let spread_count = self
            .args
            .iter()
            .filter(|arg| arg.kind == ArgKind::Spread)
            .count();
        if spread_count > 1 {
            return Err(DescriptorError::MultipleSpread {
                command: self.command_name,
            });
        }
        if let Some(position) = self.args.iter().position(|arg| arg.kind == ArgKind::Spread) {
            if position != self.args.len() - 1 {
                return Err(DescriptorError::SpreadNotLast(
                    self.args[position].name.clone(),
                ));
            }
        }

        let mut seen: Vec<&str> = Vec::with_capacity(self.flags.len());
        for flag in &self.flags {
            if seen.contains(&flag.name.as_str()) {
                return Err(DescriptorError::DuplicateFlag {
                    flag: flag.name.clone(),
                    command: self.command_name,
                });
            }
            seen.push(&flag.name);
        }

        Ok(CommandMetaData {
            command_name: self.command_name,
            description: self.description,
            help: self.help,
            args: self.args,
            flags: self.flags,
            aliases: self.aliases,
        })
    }
}
