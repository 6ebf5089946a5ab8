//! parser::tokenizer
//!
//! Raw argv tokenization under a fixed, non-overridable policy.
//!
//! # Policy
//!
//! - No camel-case flag-name expansion and no dot-path nesting
//! - Aliases collapse to the canonical flag name
//! - Short-option grouping: `-abc` is `-a -b -c`
//! - `--no-x` negates a declared boolean flag `x`
//! - Repeated array-typed flags flatten into one list; an array flag
//!   consumes exactly one value per occurrence, never tokens belonging to a
//!   later flag
//! - Bare numeric-looking values of number-typed or undeclared flags become
//!   numbers; positional tokens never auto-convert
//! - Count-marked flags accumulate occurrence totals
//! - Tokens after a literal `--` separator are preserved verbatim and never
//!   reinterpreted as flags
//!
//! Recognizing a bare word as a flag value vs. a positional depends on the
//! full set of declared flag names, so the [`FlagUniverse`] (command flags
//! plus kernel global flags, including aliases) must be supplied up front.

use crate::descriptor::{FlagDescriptor, FlagKind, FlagValue};

use super::output::Tokenized;

/// The complete set of flags that can legally appear for one invocation:
/// the target command's own flags plus the kernel's global flags.
#[derive(Debug, Clone, Default)]
pub struct FlagUniverse {
    specs: Vec<FlagDescriptor>,
}

impl FlagUniverse {
    /// Build the universe from a command's flags and the kernel's globals.
    pub fn new(command_flags: &[FlagDescriptor], global_flags: &[FlagDescriptor]) -> Self {
        let specs = command_flags
            .iter()
            .chain(global_flags.iter())
            .cloned()
            .collect();
        Self { specs }
    }

    /// A universe with no declared flags.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Resolve a word (canonical name or alias) to its descriptor.
    pub fn resolve(&self, word: &str) -> Option<&FlagDescriptor> {
        self.specs
            .iter()
            .find(|spec| spec.name == word || spec.aliases.iter().any(|alias| alias == word))
    }

    /// Whether the word names a declared flag (by name or alias).
    pub fn contains(&self, word: &str) -> bool {
        self.resolve(word).is_some()
    }

    /// All declared descriptors, command flags first.
    pub fn declared(&self) -> &[FlagDescriptor] {
        &self.specs
    }
}

/// Tokenize an argument vector against the declared flag universe.
///
/// # Example
///
/// ```
/// use tiller::descriptor::{FlagDescriptor, FlagKind, FlagValue};
/// use tiller::parser::{tokenize, FlagUniverse};
///
/// let flags = [FlagDescriptor::new("connection", FlagKind::String).aliased("c")];
/// let universe = FlagUniverse::new(&flags, &[]);
///
/// let argv: Vec<String> = ["users", "-c", "sqlite"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
/// let tok = tokenize(&argv, &universe);
///
/// assert_eq!(tok.positional, vec!["users".to_string()]);
/// assert_eq!(tok.flag("connection"), Some(&FlagValue::from("sqlite")));
/// ```
pub fn tokenize(argv: &[String], universe: &FlagUniverse) -> Tokenized {
    let mut out = Tokenized::default();
    let mut after_separator = false;

    let mut i = 0;
    while i < argv.len() {
        let token = &argv[i];

        if after_separator {
            out.extra.push(token.clone());
            i += 1;
        } else if token == "--" {
            after_separator = true;
            i += 1;
        } else if let Some(body) = token.strip_prefix("--") {
            i = long_flag(body, argv, i, universe, &mut out);
        } else if token.len() > 1 && token.starts_with('-') && !looks_numeric(token) {
            i = short_group(&token[1..], argv, i, universe, &mut out);
        } else {
            out.positional.push(token.clone());
            i += 1;
        }
    }

    out
}

/// Handle a `--long` token. Returns the index of the next unconsumed token.
fn long_flag(
    body: &str,
    argv: &[String],
    i: usize,
    universe: &FlagUniverse,
    out: &mut Tokenized,
) -> usize {
    let (raw, inline) = match body.split_once('=') {
        Some((raw, value)) => (raw, Some(value)),
        None => (body, None),
    };

    // `--no-x` negation applies only when `x` is a declared boolean and
    // `no-x` is not itself a declared flag.
    if inline.is_none() && !universe.contains(raw) {
        if let Some(positive) = raw.strip_prefix("no-") {
            if let Some(spec) = universe.resolve(positive) {
                if spec.kind == FlagKind::Boolean && !spec.count {
                    let name = spec.name.clone();
                    out.set_flag(&name, FlagValue::Bool(false));
                    return i + 1;
                }
            }
        }
    }

    assign(raw, inline, argv, i, universe, out)
}

/// Handle a `-abc` short group. All but the last character are presence-only;
/// the last may take a value.
fn short_group(
    group: &str,
    argv: &[String],
    i: usize,
    universe: &FlagUniverse,
    out: &mut Tokenized,
) -> usize {
    let (body, inline) = match group.split_once('=') {
        Some((body, value)) => (body, Some(value)),
        None => (group, None),
    };

    let chars: Vec<char> = body.chars().collect();
    if chars.is_empty() {
        out.positional.push(format!("-{}", group));
        return i + 1;
    }

    for c in &chars[..chars.len() - 1] {
        let raw = c.to_string();
        match universe.resolve(&raw) {
            Some(spec) if spec.count => {
                let name = spec.name.clone();
                out.bump_flag(&name);
            }
            Some(spec) => {
                let name = spec.name.clone();
                out.set_flag(&name, FlagValue::Bool(true));
            }
            None => out.set_flag(&raw, FlagValue::Bool(true)),
        }
    }

    let last = chars[chars.len() - 1].to_string();
    assign(&last, inline, argv, i, universe, out)
}

/// Record a value for a flag word, consuming a following value token when
/// the flag's declared type takes one. Returns the next unconsumed index.
fn assign(
    raw: &str,
    inline: Option<&str>,
    argv: &[String],
    i: usize,
    universe: &FlagUniverse,
    out: &mut Tokenized,
) -> usize {
    let Some(spec) = universe.resolve(raw) else {
        // Undeclared flags never consume the following token, so declared
        // positionals still resolve. The binder reports them afterwards.
        let value = match inline {
            Some(value) => coerce_unknown(value),
            None => FlagValue::Bool(true),
        };
        out.set_flag(raw, value);
        return i + 1;
    };
    let name = spec.name.clone();

    match spec.kind {
        FlagKind::Boolean => {
            if spec.count {
                out.bump_flag(&name);
            } else {
                let value = inline.map(parse_boolish).unwrap_or(true);
                out.set_flag(&name, FlagValue::Bool(value));
            }
            i + 1
        }
        FlagKind::String => match inline.map(str::to_string).or_else(|| value_token(argv, i)) {
            Some(value) => {
                let consumed = if inline.is_some() { 1 } else { 2 };
                out.set_flag(&name, FlagValue::Str(value));
                i + consumed
            }
            None => {
                // Value-taking flag without a value: recorded as bare
                // presence for the validator to report.
                out.set_flag(&name, FlagValue::Bool(true));
                i + 1
            }
        },
        FlagKind::Number => match inline.map(str::to_string).or_else(|| value_token(argv, i)) {
            Some(value) => {
                let consumed = if inline.is_some() { 1 } else { 2 };
                let coerced = match value.parse::<f64>() {
                    Ok(number) => FlagValue::Num(number),
                    Err(_) => FlagValue::Str(value),
                };
                out.set_flag(&name, coerced);
                i + consumed
            }
            None => {
                out.set_flag(&name, FlagValue::Bool(true));
                i + 1
            }
        },
        FlagKind::Array => match inline.map(str::to_string).or_else(|| value_token(argv, i)) {
            Some(value) => {
                let consumed = if inline.is_some() { 1 } else { 2 };
                out.push_flag_item(&name, value);
                i + consumed
            }
            None => {
                out.set_flag(&name, FlagValue::Bool(true));
                i + 1
            }
        },
    }
}

/// The token following `argv[i]`, if it can serve as a flag value.
fn value_token(argv: &[String], i: usize) -> Option<String> {
    argv.get(i + 1)
        .filter(|next| !is_flag_like(next))
        .cloned()
}

fn is_flag_like(token: &str) -> bool {
    token.starts_with('-') && token.len() > 1 && !looks_numeric(token)
}

fn looks_numeric(token: &str) -> bool {
    !token.is_empty() && token.parse::<f64>().is_ok()
}

fn parse_boolish(value: &str) -> bool {
    !matches!(value, "false" | "0")
}

fn coerce_unknown(value: &str) -> FlagValue {
    if looks_numeric(value) {
        FlagValue::Num(value.parse::<f64>().unwrap_or_default())
    } else {
        match value {
            "true" => FlagValue::Bool(true),
            "false" => FlagValue::Bool(false),
            _ => FlagValue::Str(value.to_string()),
        }
    }
}
