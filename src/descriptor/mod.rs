//! descriptor
//!
//! Immutable value records describing a command's surface.
//!
//! # Types
//!
//! - [`ArgumentDescriptor`] - One declared positional argument
//! - [`FlagDescriptor`] - One declared flag
//! - [`CommandMetaData`] - A command's full metadata (name, help, args, flags, aliases)
//! - [`ArgValue`] / [`FlagValue`] - Resolved runtime values
//!
//! # Lifecycle
//!
//! Descriptors are produced once, at command-definition time, and never
//! mutated afterwards. [`CommandMetaDataBuilder`] is the single construction
//! path and enforces the structural invariants:
//!
//! 1. At most one spread argument per command, and it must be declared last
//! 2. Flag names are unique within a command's own flag list
//!
//! Cross-cutting uniqueness (a command's flags vs. the kernel's global flags)
//! is enforced later, at kernel boot.
//!
//! # Serialization
//!
//! All descriptor records serialize to camelCase JSON so they round-trip
//! through the persisted command index (`{"commands": [...], "version": 1}`).
//! Parse hooks are runtime-only and are skipped during serialization.

mod argument;
mod flag;
mod metadata;
mod value;

pub use argument::{ArgKind, ArgumentDescriptor};
pub use flag::{FlagDescriptor, FlagKind};
pub use metadata::{CommandMetaData, CommandMetaDataBuilder, Help};
pub use value::{ArgValue, FlagValue, ParseHook};

use thiserror::Error;

/// Errors from descriptor construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DescriptorError {
    /// A spread argument was declared before the final position.
    #[error("spread argument '{0}' must be the last declared argument")]
    SpreadNotLast(String),

    /// More than one spread argument was declared.
    #[error("command '{command}' declares more than one spread argument")]
    MultipleSpread {
        /// Command name.
        command: String,
    },

    /// Two flags on the same command share a name.
    #[error("duplicate flag '{flag}' on command '{command}'")]
    DuplicateFlag {
        /// The colliding flag name.
        flag: String,
        /// Command name.
        command: String,
    },

    /// A command name was empty.
    #[error("command name cannot be empty")]
    EmptyCommandName,
}
