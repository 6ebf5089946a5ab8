//! descriptor::value
//!
//! Resolved runtime values for arguments and flags.
//!
//! Values are plain data. Positional tokens never auto-convert, so an
//! argument value is always a string (or a list of strings for a spread
//! argument). Flag values carry the richer set of shapes the tokenizer can
//! produce: strings, booleans, numbers, and flattened arrays.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A resolved positional-argument value.
///
/// # Example
///
/// ```
/// use tiller::descriptor::ArgValue;
///
/// let scalar = ArgValue::Str("users".to_string());
/// assert_eq!(scalar.as_str(), Some("users"));
///
/// let spread = ArgValue::List(vec!["a".to_string(), "b".to_string()]);
/// assert_eq!(spread.as_list().map(|l| l.len()), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
    /// A single token.
    Str(String),
    /// All remaining tokens, consumed by a spread argument.
    List(Vec<String>),
}

impl ArgValue {
    /// Get the scalar form, if this is a single token.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgValue::Str(s) => Some(s),
            ArgValue::List(_) => None,
        }
    }

    /// Get the list form, if this is a spread value.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            ArgValue::Str(_) => None,
            ArgValue::List(items) => Some(items),
        }
    }

    /// Wrap a scalar into a one-element list; lists pass through unchanged.
    ///
    /// Spread arguments use this to normalize scalar defaults.
    pub fn into_list(self) -> ArgValue {
        match self {
            ArgValue::Str(s) => ArgValue::List(vec![s]),
            list @ ArgValue::List(_) => list,
        }
    }
}

impl From<&str> for ArgValue {
    fn from(s: &str) -> Self {
        ArgValue::Str(s.to_string())
    }
}

/// A resolved flag value.
///
/// The tokenizer produces these under a fixed coercion policy: bare
/// numeric-looking values of number-typed (or undeclared) flags become
/// [`FlagValue::Num`], repeated array flags flatten into one
/// [`FlagValue::List`], and a valueless boolean occurrence is
/// [`FlagValue::Bool`]`(true)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    /// Boolean flag (or `--no-x` negation).
    Bool(bool),
    /// Numeric flag value, or a count-flag occurrence total.
    Num(f64),
    /// String flag value.
    Str(String),
    /// Flattened array-flag values, one entry per occurrence.
    List(Vec<String>),
}

impl FlagValue {
    /// Get the boolean form, if any.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FlagValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the numeric form, if any.
    pub fn as_num(&self) -> Option<f64> {
        match self {
            FlagValue::Num(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the string form, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FlagValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get the list form, if any.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FlagValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for FlagValue {
    fn from(s: &str) -> Self {
        FlagValue::Str(s.to_string())
    }
}

impl From<bool> for FlagValue {
    fn from(b: bool) -> Self {
        FlagValue::Bool(b)
    }
}

impl From<f64> for FlagValue {
    fn from(n: f64) -> Self {
        FlagValue::Num(n)
    }
}

/// A runtime transform applied to an argument's resolved value.
///
/// Hooks run inside the binder, after defaults resolve and only when a value
/// is actually present. They are runtime-only and never serialize.
#[derive(Clone)]
pub struct ParseHook(Arc<dyn Fn(ArgValue) -> ArgValue + Send + Sync>);

impl ParseHook {
    /// Wrap a transform function.
    pub fn new(f: impl Fn(ArgValue) -> ArgValue + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Apply the hook to a resolved value.
    pub fn apply(&self, value: ArgValue) -> ArgValue {
        (self.0)(value)
    }
}

impl fmt::Debug for ParseHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ParseHook(..)")
    }
}
