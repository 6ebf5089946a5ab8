//! parser::binder
//!
//! Maps positional tokens onto declared argument descriptors.
//!
//! # Cursor semantics
//!
//! Descriptors are processed in declaration order with a positional cursor.
//! A string descriptor takes exactly the token at the cursor; a spread
//! descriptor (always last) consumes everything from the cursor onward.
//! Tokens past the final descriptor's cursor are preserved verbatim as
//! leftovers for pass-through.
//!
//! # What the binder does not do
//!
//! Required-field enforcement is explicitly not performed here; the binder
//! resolves values and labels the output, and the execution layer (see
//! [`crate::validate`]) decides whether absence is an error.

use crate::descriptor::{ArgKind, ArgValue, ArgumentDescriptor};

use super::output::{ParsedOutput, Tokenized};
use super::tokenizer::FlagUniverse;

/// Bind tokenized input to declared argument descriptors.
///
/// # Example
///
/// ```
/// use tiller::descriptor::{ArgValue, ArgumentDescriptor};
/// use tiller::parser::{bind, tokenize, FlagUniverse};
///
/// let universe = FlagUniverse::empty();
/// let argv = vec!["User".to_string()];
/// let tok = tokenize(&argv, &universe);
///
/// let args = [ArgumentDescriptor::new("name")];
/// let out = bind(tok, &args, &universe);
///
/// assert_eq!(out.arg(0), Some(&ArgValue::from("User")));
/// assert!(out.leftovers.is_empty());
/// assert!(out.unknown_flags.is_empty());
/// ```
pub fn bind(
    tokenized: Tokenized,
    descriptors: &[ArgumentDescriptor],
    universe: &FlagUniverse,
) -> ParsedOutput {
    let mut args = Vec::with_capacity(descriptors.len());
    let mut cursor = 0;

    for descriptor in descriptors {
        match descriptor.kind {
            ArgKind::Spread => {
                let rest: Vec<String> = tokenized.positional[cursor..].to_vec();
                cursor = tokenized.positional.len();

                // A scalar default wraps into a one-element sequence; no
                // default leaves the slot undefined.
                let value = if rest.is_empty() {
                    descriptor.default.clone().map(ArgValue::into_list)
                } else {
                    Some(ArgValue::List(rest))
                };
                args.push(apply_hook(descriptor, value));
            }
            ArgKind::String => {
                let value = match tokenized.positional.get(cursor) {
                    Some(token) => {
                        cursor += 1;
                        Some(ArgValue::Str(token.clone()))
                    }
                    // An explicit empty-string default is distinct from
                    // "absent, no value".
                    None => descriptor.default.clone(),
                };
                args.push(apply_hook(descriptor, value));
            }
        }
    }

    let mut leftovers: Vec<String> = tokenized.positional[cursor..].to_vec();
    leftovers.extend(tokenized.extra);

    let unknown_flags: Vec<String> = tokenized
        .flags
        .iter()
        .filter(|(name, _)| !universe.contains(name))
        .map(|(name, _)| name.clone())
        .collect();

    // Declared flags that were not supplied pick up their defaults, in
    // declaration order, after the flags that actually appeared.
    let mut flags = tokenized.flags;
    for spec in universe.declared() {
        if let Some(default) = &spec.default {
            if !flags.iter().any(|(name, _)| name == &spec.name) {
                flags.push((spec.name.clone(), default.clone()));
            }
        }
    }

    ParsedOutput {
        args,
        leftovers,
        flags,
        unknown_flags,
    }
}

fn apply_hook(descriptor: &ArgumentDescriptor, value: Option<ArgValue>) -> Option<ArgValue> {
    match (&descriptor.parse, value) {
        (Some(hook), Some(value)) => Some(hook.apply(value)),
        (_, value) => value,
    }
}
