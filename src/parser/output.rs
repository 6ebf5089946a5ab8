//! parser::output
//!
//! Output records for the two parsing stages.

use crate::descriptor::{ArgValue, FlagValue};

/// Raw tokenization result: ordered positionals, verbatim post-`--` tokens,
/// and a flag map in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tokenized {
    /// Positional tokens, in order. Never auto-converted.
    pub positional: Vec<String>,
    /// Tokens after a literal `--` separator, preserved verbatim and never
    /// reinterpreted as flags.
    pub extra: Vec<String>,
    /// Flag values keyed by canonical flag name, in first-seen order.
    pub flags: Vec<(String, FlagValue)>,
}

impl Tokenized {
    /// Look up a flag value by canonical name.
    pub fn flag(&self, name: &str) -> Option<&FlagValue> {
        self.flags
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Insert or replace a flag value, keeping the first-seen position.
    pub(crate) fn set_flag(&mut self, name: &str, value: FlagValue) {
        match self.flags.iter_mut().find(|(key, _)| key == name) {
            Some((_, slot)) => *slot = value,
            None => self.flags.push((name.to_string(), value)),
        }
    }

    /// Append one element to an array flag, creating the list on first use.
    pub(crate) fn push_flag_item(&mut self, name: &str, item: String) {
        match self.flags.iter_mut().find(|(key, _)| key == name) {
            Some((_, FlagValue::List(items))) => items.push(item),
            Some((_, slot)) => *slot = FlagValue::List(vec![item]),
            None => self
                .flags
                .push((name.to_string(), FlagValue::List(vec![item]))),
        }
    }

    /// Increment a count flag.
    pub(crate) fn bump_flag(&mut self, name: &str) {
        match self.flags.iter_mut().find(|(key, _)| key == name) {
            Some((_, FlagValue::Num(count))) => *count += 1.0,
            Some((_, slot)) => *slot = FlagValue::Num(1.0),
            None => self.flags.push((name.to_string(), FlagValue::Num(1.0))),
        }
    }
}

/// Fully bound parse result, ready for the execution layer.
///
/// `args[i]` corresponds to the i-th declared argument descriptor; `None`
/// means no token was supplied and no default was declared. Presence
/// enforcement is deliberately not performed here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedOutput {
    /// Resolved argument values, one slot per declared descriptor.
    pub args: Vec<Option<ArgValue>>,
    /// Positional tokens past the final descriptor's cursor, plus any
    /// post-`--` tokens, preserved verbatim for pass-through.
    pub leftovers: Vec<String>,
    /// Flag values keyed by canonical name, in first-seen order, with
    /// declared defaults appended for flags that were not supplied.
    pub flags: Vec<(String, FlagValue)>,
    /// Flag names present in argv but not declared by the command or the
    /// kernel's global flags, in encounter order. Informational only.
    pub unknown_flags: Vec<String>,
}

impl ParsedOutput {
    /// Look up a flag value by canonical name.
    pub fn flag(&self, name: &str) -> Option<&FlagValue> {
        self.flags
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Look up a resolved argument value by position.
    pub fn arg(&self, index: usize) -> Option<&ArgValue> {
        self.args.get(index).and_then(Option::as_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_lookup() {
        let mut tok = Tokenized::default();
        tok.set_flag("force", FlagValue::Bool(true));
        assert_eq!(tok.flag("force"), Some(&FlagValue::Bool(true)));
        assert!(tok.flag("missing").is_none());
    }

    #[test]
    fn set_flag_keeps_first_seen_position() {
        let mut tok = Tokenized::default();
        tok.set_flag("a", FlagValue::from("1"));
        tok.set_flag("b", FlagValue::from("2"));
        tok.set_flag("a", FlagValue::from("3"));
        let keys: Vec<_> = tok.flags.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(tok.flag("a"), Some(&FlagValue::from("3")));
    }

    #[test]
    fn push_flag_item_flattens() {
        let mut tok = Tokenized::default();
        tok.push_flag_item("files", "a.txt".to_string());
        tok.push_flag_item("files", "b.txt".to_string());
        assert_eq!(
            tok.flag("files"),
            Some(&FlagValue::List(vec![
                "a.txt".to_string(),
                "b.txt".to_string()
            ]))
        );
    }

    #[test]
    fn bump_flag_counts() {
        let mut tok = Tokenized::default();
        tok.bump_flag("verbose");
        tok.bump_flag("verbose");
        tok.bump_flag("verbose");
        assert_eq!(tok.flag("verbose"), Some(&FlagValue::Num(3.0)));
    }

    #[test]
    fn parsed_output_accessors() {
        let out = ParsedOutput {
            args: vec![Some(ArgValue::from("User")), None],
            leftovers: vec![],
            flags: vec![("force".to_string(), FlagValue::Bool(true))],
            unknown_flags: vec![],
        };
        assert_eq!(out.arg(0), Some(&ArgValue::from("User")));
        assert!(out.arg(1).is_none());
        assert!(out.arg(2).is_none());
        assert_eq!(out.flag("force"), Some(&FlagValue::Bool(true)));
    }
}
