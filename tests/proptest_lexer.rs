//! Property-based tests with proptest.
//!
//! Plain text must survive `format(tokenize(s))` unchanged and carry
//! exact positions. Canonical markup must round-trip as well.

mod common;

use bbcode_lexer::{TokenKind, format, tokenize};
use proptest::prelude::*;

// -- Strategies --

/// Text with no tag markup; stray `]`, `=` and `"` are allowed.
fn plain_text() -> impl Strategy<Value = String> {
    r#"[a-zA-Z0-9 \t\n\r="\].,é]{0,64}"#.prop_map(|s| s)
}

fn tag_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,7}".prop_map(|s| s)
}

fn attr_value() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9:/.#-]{1,12}".prop_map(|s| s)
}

/// One canonical markup fragment.
fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-z0-9.,!]{1,8}".prop_map(|s| s),
        2 => Just(" ".to_string()),
        1 => Just("\t".to_string()),
        1 => Just("\n".to_string()),
        2 => tag_name().prop_map(|n| format!("[{n}]")),
        2 => tag_name().prop_map(|n| format!("[/{n}]")),
        1 => (tag_name(), tag_name()).prop_map(|(n, flag)| format!("[{n} {flag}]")),
        1 => (tag_name(), prop::collection::vec((tag_name(), attr_value()), 1..=3)).prop_map(
            |(n, attrs)| {
                let attrs: String = attrs
                    .iter()
                    .map(|(k, v)| format!(" {k}=\"{v}\""))
                    .collect();
                format!("[{n}{attrs}]")
            }
        ),
    ]
}

fn markup() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment(), 0..=16).prop_map(|parts| parts.concat())
}

// -- Properties --

proptest! {
    #[test]
    fn plain_text_roundtrips(input in plain_text()) {
        let tokens = tokenize(&input);
        prop_assert_eq!(format(&tokens), input);
    }

    #[test]
    fn plain_text_positions(input in plain_text()) {
        let tokens = tokenize(&input);
        let actual: Vec<_> = tokens.iter().map(|t| (t.line, t.column)).collect();
        prop_assert_eq!(actual, common::expected_positions(&tokens));
    }

    #[test]
    fn newline_advances_line(input in plain_text()) {
        let tokens = tokenize(&input);
        let newlines: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Newline)
            .map(|t| t.line)
            .collect();
        let expected: Vec<_> = (0..newlines.len()).collect();
        prop_assert_eq!(newlines, expected);
    }

    #[test]
    fn canonical_markup_roundtrips(input in markup()) {
        let tokens = tokenize(&input);
        prop_assert_eq!(format(&tokens), input);
    }

    #[test]
    fn tokenize_is_idempotent(input in "\\PC{0,48}") {
        prop_assert_eq!(tokenize(&input), tokenize(&input));
    }

    #[test]
    fn never_more_tokens_than_chars(input in "\\PC{0,48}") {
        prop_assert!(tokenize(&input).len() <= input.chars().count());
    }
}
