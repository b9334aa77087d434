#![allow(dead_code)]

use bbcode_lexer::{Token, TokenKind, format, tokenize};

/// Tokenize and strip positions, for comparing against expected streams.
pub fn lex(input: &str) -> Vec<(TokenKind, String)> {
    tokenize(input)
        .into_iter()
        .map(|t| (t.kind, t.value))
        .collect()
}

pub fn word(value: &str) -> (TokenKind, String) {
    (TokenKind::Word, value.to_string())
}

pub fn tag(value: &str) -> (TokenKind, String) {
    (TokenKind::Tag, value.to_string())
}

pub fn attr_name(value: &str) -> (TokenKind, String) {
    (TokenKind::AttrName, value.to_string())
}

pub fn attr_value(value: &str) -> (TokenKind, String) {
    (TokenKind::AttrValue, value.to_string())
}

pub fn space() -> (TokenKind, String) {
    (TokenKind::Space, bbcode_lexer::PLACEHOLDER_SPACE.to_string())
}

pub fn tab() -> (TokenKind, String) {
    (TokenKind::Space, bbcode_lexer::PLACEHOLDER_SPACE_TAB.to_string())
}

pub fn newline() -> (TokenKind, String) {
    (TokenKind::Newline, "\n".to_string())
}

pub fn roundtrip(input: &str) {
    let tokens = tokenize(input);
    let output = format(&tokens);
    assert_eq!(
        output, input,
        "round-trip mismatch:\n--- expected ---\n{input}\n--- got ---\n{output}"
    );
}

/// Expected `(line, column)` of every token, derived from the source
/// offset each token starts at. Only valid for streams that round-trip.
pub fn expected_positions(tokens: &[Token]) -> Vec<(usize, usize)> {
    let mut positions = Vec::with_capacity(tokens.len());
    let (mut line, mut column) = (0, 0);

    for token in tokens {
        positions.push((line, column));
        let text = format(std::slice::from_ref(token));
        for ch in text.chars() {
            if ch == '\n' {
                line += 1;
                column = 0;
            } else {
                column += 1;
            }
        }
    }

    positions
}
