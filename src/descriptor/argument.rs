//! descriptor::argument
//!
//! Positional-argument descriptors.

use serde::{Deserialize, Serialize};

use super::value::{ArgValue, ParseHook};

/// How a positional argument consumes tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgKind {
    /// Takes exactly one token.
    String,
    /// Consumes every remaining token. Must be the last declared argument.
    Spread,
}

/// One declared positional argument.
///
/// Built fluently and then never mutated:
///
/// ```
/// use tiller::descriptor::{ArgumentDescriptor, ArgValue};
///
/// let arg = ArgumentDescriptor::new("name")
///     .described("Name of the model")
///     .with_default(ArgValue::from("posts"))
///     .optional();
///
/// assert_eq!(arg.name, "name");
/// assert!(!arg.required);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgumentDescriptor {
    /// Lookup key, as used in `ParsedOutput`.
    pub name: String,
    /// Display form, as it appears in help output.
    pub argument_name: String,
    /// Token-consumption behavior.
    #[serde(rename = "type")]
    pub kind: ArgKind,
    /// Whether the execution layer should treat absence as an error.
    #[serde(default = "default_required")]
    pub required: bool,
    /// One-line description for help output.
    #[serde(default)]
    pub description: String,
    /// Value substituted when no token is supplied. An explicit empty-string
    /// default is distinct from no default at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<ArgValue>,
    /// Runtime transform applied to the resolved value.
    #[serde(skip)]
    pub parse: Option<ParseHook>,
}

fn default_required() -> bool {
    true
}

impl ArgumentDescriptor {
    /// Create a required string argument.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            argument_name: name.clone(),
            name,
            kind: ArgKind::String,
            required: true,
            description: String::new(),
            default: None,
            parse: None,
        }
    }

    /// Create a required spread argument.
    pub fn spread(name: impl Into<String>) -> Self {
        Self {
            kind: ArgKind::Spread,
            ..Self::new(name)
        }
    }

    /// Mark the argument optional.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Set the help description.
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the display name shown in help output.
    pub fn displayed_as(mut self, argument_name: impl Into<String>) -> Self {
        self.argument_name = argument_name.into();
        self
    }

    /// Set the default value. Implies the argument is optional.
    pub fn with_default(mut self, default: ArgValue) -> Self {
        self.default = Some(default);
        self.required = false;
        self
    }

    /// Attach a runtime parse hook.
    pub fn with_parse(mut self, hook: ParseHook) -> Self {
        self.parse = Some(hook);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_required_string() {
        let arg = ArgumentDescriptor::new("name");
        assert_eq!(arg.kind, ArgKind::String);
        assert!(arg.required);
        assert_eq!(arg.argument_name, "name");
        assert!(arg.default.is_none());
        assert!(arg.parse.is_none());
    }

    #[test]
    fn spread_kind() {
        let arg = ArgumentDescriptor::spread("files");
        assert_eq!(arg.kind, ArgKind::Spread);
    }

    #[test]
    fn default_implies_optional() {
        let arg = ArgumentDescriptor::new("table").with_default(ArgValue::from("posts"));
        assert!(!arg.required);
        assert_eq!(arg.default, Some(ArgValue::from("posts")));
    }

    #[test]
    fn serde_roundtrip_uses_camel_case() {
        let arg = ArgumentDescriptor::new("model-name")
            .displayed_as("model name")
            .described("Name of the model");
        let json = serde_json::to_value(&arg).unwrap();
        assert_eq!(json["argumentName"], "model name");
        assert_eq!(json["type"], "string");

        let back: ArgumentDescriptor = serde_json::from_value(json).unwrap();
        assert_eq!(back.name, "model-name");
        assert!(back.required);
    }

    #[test]
    fn parse_hook_is_not_serialized() {
        let arg = ArgumentDescriptor::new("name").with_parse(ParseHook::new(|v| v));
        let json = serde_json::to_string(&arg).unwrap();
        let back: ArgumentDescriptor = serde_json::from_str(&json).unwrap();
        assert!(back.parse.is_none());
    }
}
