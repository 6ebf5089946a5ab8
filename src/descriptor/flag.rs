//! descriptor::flag
//!
//! Flag descriptors.

use serde::{Deserialize, Serialize};

use super::value::FlagValue;

/// The value shape a flag accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagKind {
    /// Takes one string value.
    String,
    /// Takes no value; presence means `true`, `--no-x` means `false`.
    Boolean,
    /// Takes one numeric value.
    Number,
    /// Takes one value per occurrence; occurrences flatten into one list.
    Array,
}

/// One declared flag.
///
/// ```
/// use tiller::descriptor::{FlagDescriptor, FlagKind};
///
/// let flag = FlagDescriptor::new("connection", FlagKind::String)
///     .described("Database connection to use")
///     .aliased("c");
///
/// assert_eq!(flag.flag_name, "connection");
/// assert_eq!(flag.aliases, vec!["c".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagDescriptor {
    /// Lookup key, as used in `ParsedOutput`.
    pub name: String,
    /// Display form, as it appears in help output.
    pub flag_name: String,
    /// Value shape.
    #[serde(rename = "type")]
    pub kind: FlagKind,
    /// Whether the execution layer should treat absence as an error.
    #[serde(default)]
    pub required: bool,
    /// One-line description for help output.
    #[serde(default)]
    pub description: String,
    /// Value substituted when the flag is not supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<FlagValue>,
    /// Alternate names that collapse to [`FlagDescriptor::name`].
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    /// Count marker: repeated occurrences accumulate into a number
    /// (`-vvv` resolves to `3`). Only meaningful for boolean flags.
    #[serde(default)]
    pub count: bool,
}

impl FlagDescriptor {
    /// Create an optional flag of the given kind.
    pub fn new(name: impl Into<String>, kind: FlagKind) -> Self {
        let name = name.into();
        Self {
            flag_name: name.clone(),
            name,
            kind,
            required: false,
            description: String::new(),
            default: None,
            aliases: Vec::new(),
            count: false,
        }
    }

    /// Mark the flag required.
    pub fn mandatory(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the help description.
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add an alias.
    pub fn aliased(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Set the default value.
    pub fn with_default(mut self, default: FlagValue) -> Self {
        self.default = Some(default);
        self
    }

    /// Mark this as a count flag.
    pub fn counted(mut self) -> Self {
        self.count = true;
        self
    }
}
