//! signature
//!
//! Parser for the signature mini-language used to declare a command's
//! arguments and flags in one compact string.
//!
//! # Grammar
//!
//! Tokens are delimited by `{...}`. A token starting with `--` declares a
//! flag, anything else a positional argument:
//!
//! ```text
//! {name} {table?} {files*} {--resource} {--c|connection=sqlite} {--tags=*}
//! ```
//!
//! Per token, the parser applies a fixed order:
//!
//! 1. Split off a `:description` suffix at the first `:`, trimmed
//! 2. Split off a `name=default` suffix at the first `=`
//! 3. Detect a trailing `*` (spread argument / array flag)
//! 4. Detect a trailing `?` (optional)
//!
//! The order matters: description text may contain `=` or `?`, and must not
//! corrupt default or optional detection.
//!
//! # Leniency
//!
//! Malformed tokens degrade to a descriptor with an empty name rather than
//! raising. Strictness belongs to binding and validation, not declaration.
//! The one hard error is an unterminated `{`.

use thiserror::Error;

use crate::descriptor::{
    ArgValue, ArgumentDescriptor, FlagDescriptor, FlagKind, FlagValue,
};

/// Errors from signature parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// A `{` was opened but never closed.
    #[error("unterminated '{{' in signature at byte {0}")]
    Unterminated(usize),
}

/// Result of parsing a signature: declared args and flags, each in
/// declaration order.
#[derive(Debug, Clone, Default)]
pub struct ParsedSignature {
    /// Positional arguments, left to right.
    pub args: Vec<ArgumentDescriptor>,
    /// Flags, left to right.
    pub flags: Vec<FlagDescriptor>,
}

/// Parse a signature string into descriptors.
///
/// # Example
///
/// ```
/// use tiller::signature::parse_signature;
///
/// let parsed = parse_signature("{name} {table=posts} {--m|migration}").unwrap();
/// assert_eq!(parsed.args.len(), 2);
/// assert_eq!(parsed.flags.len(), 1);
/// assert_eq!(parsed.flags[0].name, "migration");
/// assert_eq!(parsed.flags[0].aliases, vec!["m".to_string()]);
/// ```
pub fn parse_signature(signature: &str) -> Result<ParsedSignature, SignatureError> {
    let mut parsed = ParsedSignature::default();

    let mut rest = signature;
    let mut offset = 0;
    while let Some(open) = rest.find('{') {
        let after_open = &rest[open + 1..];
        let close = after_open
            .find('}')
            .ok_or(SignatureError::Unterminated(offset + open))?;
        let token = &after_open[..close];

        if let Some(flag_token) = token.strip_prefix("--") {
            parsed.flags.push(parse_flag_token(flag_token));
        } else {
            parsed.args.push(parse_arg_token(token));
        }

        offset += open + 1 + close + 1;
        rest = &after_open[close + 1..];
    }

    Ok(parsed)
}

/// Split a token into (body, description) at the first `:`.
fn split_description(token: &str) -> (&str, &str) {
    match token.split_once(':') {
        Some((body, description)) => (body.trim(), description.trim()),
        None => (token.trim(), ""),
    }
}

/// Split a body into (name, default) at the first `=`.
fn split_default(body: &str) -> (&str, Option<&str>) {
    match body.split_once('=') {
        Some((name, default)) => (name, Some(default)),
        None => (body, None),
    }
}

fn parse_arg_token(token: &str) -> ArgumentDescriptor {
    let (body, description) = split_description(token);
    let (mut name, default) = split_default(body);

    let spread = if let Some(stripped) = name.strip_suffix('*') {
        name = stripped;
        true
    } else {
        false
    };
    let optional = if let Some(stripped) = name.strip_suffix('?') {
        name = stripped;
        true
    } else {
        false
    };

    let mut arg = if spread {
        ArgumentDescriptor::spread(name)
    } else {
        ArgumentDescriptor::new(name)
    };
    arg = arg.described(description);
    if optional {
        arg = arg.optional();
    }
    if let Some(default) = default {
        arg = arg.with_default(ArgValue::Str(default.to_string()));
    }
    arg
}

fn parse_flag_token(token: &str) -> FlagDescriptor {
    let (body, description) = split_description(token);
    let (mut name, default) = split_default(body);

    if let Some(stripped) = name.strip_suffix('?') {
        name = stripped;
    }

    // Leading short aliases: `{--c|connection}`. The last segment is the
    // canonical name.
    let mut segments: Vec<&str> = name.split('|').collect();
    let canonical = segments.pop().unwrap_or_default();
    let aliases = segments;

    let (kind, default) = match default {
        // `--tags=*` declares an array flag with no default.
        Some("*") => (FlagKind::Array, None),
        // `--connection=` declares a string flag expecting a value.
        Some("") => (FlagKind::String, None),
        Some(value) => match value.parse::<f64>() {
            Ok(number) => (FlagKind::Number, Some(FlagValue::Num(number))),
            Err(_) => (FlagKind::String, Some(FlagValue::Str(value.to_string()))),
        },
        None => (FlagKind::Boolean, None),
    };

    let mut flag = FlagDescriptor::new(canonical, kind).described(description);
    for alias in aliases {
        flag = flag.aliased(alias);
    }
    if let Some(default) = default {
        flag = flag.with_default(default);
    }
    flag
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ArgKind;

    mod arguments {
        use super::*;

        #[test]
        fn plain_required_argument() {
            let parsed = parse_signature("{name}").unwrap();
            assert_eq!(parsed.args.len(), 1);
            let arg = &parsed.args[0];
            assert_eq!(arg.name, "name");
            assert_eq!(arg.kind, ArgKind::String);
            assert!(arg.required);
        }

        #[test]
        fn optional_argument() {
            let parsed = parse_signature("{table?}").unwrap();
            assert!(!parsed.args[0].required);
            assert_eq!(parsed.args[0].name, "table");
        }

        #[test]
        fn argument_with_default() {
            let parsed = parse_signature("{table=posts}").unwrap();
            let arg = &parsed.args[0];
            assert_eq!(arg.default, Some(ArgValue::from("posts")));
            assert!(!arg.required);
        }

        #[test]
        fn spread_argument() {
            let parsed = parse_signature("{files*}").unwrap();
            assert_eq!(parsed.args[0].kind, ArgKind::Spread);
            assert_eq!(parsed.args[0].name, "files");
        }

        #[test]
        fn optional_spread() {
            let parsed = parse_signature("{files?*}").unwrap();
            let arg = &parsed.args[0];
            assert_eq!(arg.kind, ArgKind::Spread);
            assert!(!arg.required);
        }

        #[test]
        fn description_split_before_default() {
            // The description contains '=' and '?'; neither must leak into
            // default or optional detection.
            let parsed = parse_signature("{name : The model name, e.g. x=y?}").unwrap();
            let arg = &parsed.args[0];
            assert_eq!(arg.name, "name");
            assert!(arg.required);
            assert!(arg.default.is_none());
            assert_eq!(arg.description, "The model name, e.g. x=y?");
        }

        #[test]
        fn default_and_description_together() {
            let parsed = parse_signature("{table=posts : Table to seed}").unwrap();
            let arg = &parsed.args[0];
            assert_eq!(arg.default, Some(ArgValue::from("posts")));
            assert_eq!(arg.description, "Table to seed");
        }
    }

    mod flags {
        use super::*;

        #[test]
        fn bare_flag_is_boolean() {
            let parsed = parse_signature("{--resource}").unwrap();
            let flag = &parsed.flags[0];
            assert_eq!(flag.name, "resource");
            assert_eq!(flag.kind, FlagKind::Boolean);
            assert!(flag.default.is_none());
        }

        #[test]
        fn string_flag_with_default() {
            let parsed = parse_signature("{--connection=sqlite}").unwrap();
            let flag = &parsed.flags[0];
            assert_eq!(flag.kind, FlagKind::String);
            assert_eq!(flag.default, Some(FlagValue::from("sqlite")));
        }

        #[test]
        fn numeric_default_makes_number_flag() {
            let parsed = parse_signature("{--port=3000}").unwrap();
            let flag = &parsed.flags[0];
            assert_eq!(flag.kind, FlagKind::Number);
            assert_eq!(flag.default, Some(FlagValue::Num(3000.0)));
        }

        #[test]
        fn empty_default_makes_valueless_string_flag() {
            let parsed = parse_signature("{--queue=}").unwrap();
            let flag = &parsed.flags[0];
            assert_eq!(flag.kind, FlagKind::String);
            assert!(flag.default.is_none());
        }

        #[test]
        fn star_default_makes_array_flag() {
            let parsed = parse_signature("{--tags=*}").unwrap();
            assert_eq!(parsed.flags[0].kind, FlagKind::Array);
        }

        #[test]
        fn alias_segments() {
            let parsed = parse_signature("{--c|connection=sqlite}").unwrap();
            let flag = &parsed.flags[0];
            assert_eq!(flag.name, "connection");
            assert_eq!(flag.aliases, vec!["c".to_string()]);
        }

        #[test]
        fn flag_description() {
            let parsed = parse_signature("{--force : Overwrite existing files}").unwrap();
            assert_eq!(parsed.flags[0].description, "Overwrite existing files");
        }
    }

    mod structure {
        use super::*;

        #[test]
        fn order_preserved_independently() {
            let parsed =
                parse_signature("{name} {--force} {table?} {--connection=sqlite}").unwrap();
            let arg_names: Vec<_> = parsed.args.iter().map(|a| a.name.as_str()).collect();
            let flag_names: Vec<_> = parsed.flags.iter().map(|f| f.name.as_str()).collect();
            assert_eq!(arg_names, vec!["name", "table"]);
            assert_eq!(flag_names, vec!["force", "connection"]);
        }

        #[test]
        fn counts_match_token_kinds() {
            let parsed = parse_signature("{a} {b} {--x} {c} {--y} {--z}").unwrap();
            assert_eq!(parsed.args.len(), 3);
            assert_eq!(parsed.flags.len(), 3);
        }

        #[test]
        fn text_outside_braces_ignored() {
            let parsed = parse_signature("make:model {name} extra noise {--force}").unwrap();
            assert_eq!(parsed.args.len(), 1);
            assert_eq!(parsed.flags.len(), 1);
        }

        #[test]
        fn empty_signature() {
            let parsed = parse_signature("").unwrap();
            assert!(parsed.args.is_empty());
            assert!(parsed.flags.is_empty());
        }

        #[test]
        fn malformed_token_degrades_to_empty_name() {
            let parsed = parse_signature("{}").unwrap();
            assert_eq!(parsed.args.len(), 1);
            assert_eq!(parsed.args[0].name, "");

            let parsed = parse_signature("{--}").unwrap();
            assert_eq!(parsed.flags.len(), 1);
            assert_eq!(parsed.flags[0].name, "");
        }

        #[test]
        fn unterminated_brace_is_an_error() {
            let err = parse_signature("{name} {oops").unwrap_err();
            assert_eq!(err, SignatureError::Unterminated(7));
        }
    }
}
