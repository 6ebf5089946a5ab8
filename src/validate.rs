//! validate
//!
//! Presence and type enforcement over a bound [`ParsedOutput`].
//!
//! # Separation of concerns
//!
//! The binder resolves values; it never aborts. Whether a missing required
//! argument, a valueless flag, or an unknown flag is fatal belongs to the
//! execution layer, and that layer calls [`validate`] to get a structured
//! answer. The checks are pure and run in a fixed order: arguments first,
//! then flags (command flags before globals), then unknown flags.

use thiserror::Error;

use crate::descriptor::{ArgValue, CommandMetaData, FlagDescriptor, FlagKind, FlagValue};
use crate::parser::ParsedOutput;

/// Validation failures over a bound parse result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidateError {
    /// A required argument received no token and has no default.
    #[error("missing required argument '{0}'")]
    MissingArgument(String),

    /// A required argument resolved to an empty string with no declared
    /// default to fall back on.
    #[error("missing value for argument '{0}'")]
    MissingArgumentValue(String),

    /// A required flag never appeared and has no default.
    #[error("missing required flag '--{0}'")]
    MissingFlag(String),

    /// A value-taking flag appeared with no value.
    #[error("missing value for flag '--{0}'")]
    MissingFlagValue(String),

    /// A flag appeared that neither the command nor the kernel declares.
    #[error("unknown flag '--{0}'")]
    UnknownFlag(String),

    /// A flag value does not match the declared type.
    #[error("invalid value for flag '--{name}': expected {expected}")]
    InvalidFlagType {
        /// The flag name.
        name: String,
        /// The declared type.
        expected: &'static str,
    },
}

/// Validate a parse result against a command's declared surface plus the
/// kernel's global flags.
///
/// Returns the first failure in check order, or `Ok` when the output
/// satisfies every declaration.
pub fn validate(
    parsed: &ParsedOutput,
    meta: &CommandMetaData,
    global_flags: &[FlagDescriptor],
) -> Result<(), ValidateError> {
    for (index, descriptor) in meta.args.iter().enumerate() {
        if !descriptor.required {
            continue;
        }
        match parsed.args.get(index).and_then(Option::as_ref) {
            None => return Err(ValidateError::MissingArgument(descriptor.name.clone())),
            Some(ArgValue::Str(value)) if value.is_empty() && descriptor.default.is_none() => {
                return Err(ValidateError::MissingArgumentValue(descriptor.name.clone()));
            }
            Some(_) => {}
        }
    }

    for flag in meta.flags.iter().chain(global_flags.iter()) {
        match parsed.flag(&flag.name) {
            None => {
                if flag.required {
                    return Err(ValidateError::MissingFlag(flag.name.clone()));
                }
            }
            Some(value) => check_flag_value(flag, value)?,
        }
    }

    if let Some(name) = parsed.unknown_flags.first() {
        return Err(ValidateError::UnknownFlag(name.clone()));
    }

    Ok(())
}

fn check_flag_value(flag: &FlagDescriptor, value: &FlagValue) -> Result<(), ValidateError> {
    match (flag.kind, value) {
        // A value-taking flag recorded as bare presence means the value
        // token was never supplied.
        (FlagKind::String | FlagKind::Number | FlagKind::Array, FlagValue::Bool(_)) => {
            Err(ValidateError::MissingFlagValue(flag.name.clone()))
        }
        (FlagKind::Number, FlagValue::Str(_)) => Err(ValidateError::InvalidFlagType {
            name: flag.name.clone(),
            expected: "number",
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ArgumentDescriptor;
    use crate::parser::{bind, tokenize, FlagUniverse};

    fn argv(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    fn parse(meta: &CommandMetaData, globals: &[FlagDescriptor], tokens: &[&str]) -> ParsedOutput {
        let universe = FlagUniverse::new(&meta.flags, globals);
        bind(tokenize(&argv(tokens), &universe), &meta.args, &universe)
    }

    #[test]
    fn satisfied_declaration_passes() {
        let meta = CommandMetaData::builder("make:model")
            .arg(ArgumentDescriptor::new("name"))
            .flag(FlagDescriptor::new("connection", FlagKind::String))
            .build()
            .unwrap();
        let parsed = parse(&meta, &[], &["User", "--connection", "sqlite"]);
        assert_eq!(validate(&parsed, &meta, &[]), Ok(()));
    }

    #[test]
    fn missing_required_argument() {
        let meta = CommandMetaData::builder("make:model")
            .arg(ArgumentDescriptor::new("name"))
            .build()
            .unwrap();
        let parsed = parse(&meta, &[], &[]);
        assert_eq!(
            validate(&parsed, &meta, &[]),
            Err(ValidateError::MissingArgument("name".to_string()))
        );
    }

    #[test]
    fn empty_required_argument_is_missing_value() {
        let meta = CommandMetaData::builder("make:model")
            .arg(ArgumentDescriptor::new("name"))
            .build()
            .unwrap();
        let parsed = parse(&meta, &[], &[""]);
        assert_eq!(
            validate(&parsed, &meta, &[]),
            Err(ValidateError::MissingArgumentValue("name".to_string()))
        );
    }

    #[test]
    fn optional_argument_may_be_absent() {
        let meta = CommandMetaData::builder("make:model")
            .arg(ArgumentDescriptor::new("table").optional())
            .build()
            .unwrap();
        let parsed = parse(&meta, &[], &[]);
        assert_eq!(validate(&parsed, &meta, &[]), Ok(()));
    }

    #[test]
    fn missing_required_flag() {
        let meta = CommandMetaData::builder("db:seed")
            .flag(FlagDescriptor::new("connection", FlagKind::String).mandatory())
            .build()
            .unwrap();
        let parsed = parse(&meta, &[], &[]);
        assert_eq!(
            validate(&parsed, &meta, &[]),
            Err(ValidateError::MissingFlag("connection".to_string()))
        );
    }

    #[test]
    fn flag_default_satisfies_required() {
        let meta = CommandMetaData::builder("db:seed")
            .flag(
                FlagDescriptor::new("connection", FlagKind::String)
                    .mandatory()
                    .with_default(FlagValue::from("sqlite")),
            )
            .build()
            .unwrap();
        let parsed = parse(&meta, &[], &[]);
        assert_eq!(validate(&parsed, &meta, &[]), Ok(()));
    }

    #[test]
    fn valueless_value_flag_is_missing_value() {
        let meta = CommandMetaData::builder("db:seed")
            .flag(FlagDescriptor::new("connection", FlagKind::String))
            .build()
            .unwrap();
        let parsed = parse(&meta, &[], &["--connection"]);
        assert_eq!(
            validate(&parsed, &meta, &[]),
            Err(ValidateError::MissingFlagValue("connection".to_string()))
        );
    }

    #[test]
    fn non_numeric_number_flag_is_invalid_type() {
        let meta = CommandMetaData::builder("serve")
            .flag(FlagDescriptor::new("port", FlagKind::Number))
            .build()
            .unwrap();
        let parsed = parse(&meta, &[], &["--port", "abc"]);
        assert_eq!(
            validate(&parsed, &meta, &[]),
            Err(ValidateError::InvalidFlagType {
                name: "port".to_string(),
                expected: "number",
            })
        );
    }

    #[test]
    fn unknown_flag_reported_last() {
        let meta = CommandMetaData::builder("serve").build().unwrap();
        let parsed = parse(&meta, &[], &["--bogus"]);
        assert_eq!(
            validate(&parsed, &meta, &[]),
            Err(ValidateError::UnknownFlag("bogus".to_string()))
        );
    }

    #[test]
    fn global_flags_validated_too() {
        let meta = CommandMetaData::builder("serve").build().unwrap();
        let globals = [FlagDescriptor::new("env", FlagKind::String).mandatory()];
        let parsed = parse(&meta, &globals, &[]);
        assert_eq!(
            validate(&parsed, &meta, &globals),
            Err(ValidateError::MissingFlag("env".to_string()))
        );
    }
}
