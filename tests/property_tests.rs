//! Property-based tests for the parsing pipeline.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated signatures and argument vectors.

use proptest::prelude::*;

use tiller::descriptor::ArgumentDescriptor;
use tiller::parser::{bind, tokenize, FlagUniverse};
use tiller::signature::parse_signature;

/// Strategy for generating identifier-shaped names (argument and flag
/// names as a declaration would write them).
fn name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,9}"
}

/// Strategy for generating bare positional words: plain tokens that the
/// tokenizer must never reinterpret as flags.
fn bare_word() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_.]{0,11}"
}

/// Strategy for arbitrary tokens, including flag-shaped ones.
fn any_token() -> impl Strategy<Value = String> {
    prop_oneof![
        bare_word(),
        bare_word().prop_map(|w| format!("--{}", w)),
        bare_word().prop_map(|w| format!("-{}", w)),
    ]
}

proptest! {
    /// Every `{name}` token produces exactly one argument descriptor and
    /// every `{--name}` token exactly one flag descriptor, with declaration
    /// order preserved within each sequence.
    #[test]
    fn signature_token_counts_and_order(
        arg_names in prop::collection::vec(name(), 0..6),
        flag_names in prop::collection::vec(name(), 0..6),
    ) {
        let mut signature = String::new();
        for arg in &arg_names {
            signature.push_str(&format!("{{{}}} ", arg));
        }
        for flag in &flag_names {
            signature.push_str(&format!("{{--{}}} ", flag));
        }

        let parsed = parse_signature(&signature).unwrap();
        prop_assert_eq!(parsed.args.len(), arg_names.len());
        prop_assert_eq!(parsed.flags.len(), flag_names.len());

        let parsed_args: Vec<&str> = parsed.args.iter().map(|a| a.name.as_str()).collect();
        let expected: Vec<&str> = arg_names.iter().map(String::as_str).collect();
        prop_assert_eq!(parsed_args, expected);
    }

    /// With no declared flags, bare words pass through tokenization as
    /// positionals, verbatim and in order.
    #[test]
    fn bare_words_survive_tokenization(words in prop::collection::vec(bare_word(), 0..10)) {
        let tok = tokenize(&words, &FlagUniverse::empty());
        prop_assert_eq!(&tok.positional, &words);
        prop_assert!(tok.extra.is_empty());
    }

    /// Everything after a `--` separator is preserved verbatim, no matter
    /// how flag-like it looks.
    #[test]
    fn separator_shields_all_tokens(
        before in prop::collection::vec(bare_word(), 0..4),
        after in prop::collection::vec(any_token(), 0..6),
    ) {
        let mut argv = before.clone();
        argv.push("--".to_string());
        argv.extend(after.iter().cloned());

        let tok = tokenize(&argv, &FlagUniverse::empty());
        prop_assert_eq!(&tok.extra, &after);
        prop_assert_eq!(&tok.positional, &before);
    }

    /// Binding never loses a positional token: every token either fills a
    /// descriptor slot or lands in the leftovers.
    #[test]
    fn binder_conserves_positional_tokens(
        descriptor_names in prop::collection::vec(name(), 0..5),
        tokens in prop::collection::vec(bare_word(), 0..8),
    ) {
        let descriptors: Vec<ArgumentDescriptor> = descriptor_names
            .iter()
            .map(|n| ArgumentDescriptor::new(n).optional())
            .collect();

        let universe = FlagUniverse::empty();
        let parsed = bind(tokenize(&tokens, &universe), &descriptors, &universe);

        let filled = parsed.args.iter().filter(|slot| slot.is_some()).count();
        prop_assert_eq!(filled + parsed.leftovers.len(), tokens.len());
        prop_assert_eq!(parsed.args.len(), descriptors.len());
    }

    /// A trailing spread descriptor absorbs the whole tail, so nothing is
    /// ever left over.
    #[test]
    fn spread_absorbs_the_tail(
        lead in prop::collection::vec(name(), 0..3),
        tokens in prop::collection::vec(bare_word(), 0..8),
    ) {
        let mut descriptors: Vec<ArgumentDescriptor> = lead
            .iter()
            .map(|n| ArgumentDescriptor::new(n).optional())
            .collect();
        descriptors.push(ArgumentDescriptor::spread("rest").optional());

        let universe = FlagUniverse::empty();
        let parsed = bind(tokenize(&tokens, &universe), &descriptors, &universe);

        prop_assert!(parsed.leftovers.is_empty());
        if tokens.len() > lead.len() {
            let tail = parsed.args.last().unwrap().as_ref().unwrap();
            prop_assert_eq!(
                tail.as_list().map(|items| items.len()),
                Some(tokens.len() - lead.len())
            );
        }
    }
}
