//! Serializes a token stream back into BBCode markup.
//!
//! Text tokens are written verbatim with whitespace placeholders
//! restored. A tag is written together with the attribute tokens that
//! follow it, values always double-quoted.

use std::iter::Peekable;
use std::slice::Iter;

use crate::chars::{CLOSE_BRACKET, EQUALS, OPEN_BRACKET, QUOTE, SPACE, restore_placeholder};
use crate::token::{Token, TokenKind};

/// Format a token sequence into a markup string.
///
/// For plain text and for canonical markup (`[tag name="value"]`) this is
/// the inverse of [`tokenize`](crate::tokenize).
#[must_use]
pub fn format(tokens: &[Token]) -> String {
    let mut out = String::with_capacity(tokens.iter().map(|t| t.value.len() + 2).sum());
    let mut iter = tokens.iter().peekable();

    while let Some(token) = iter.next() {
        match token.kind {
            TokenKind::Space => match restore_placeholder(&token.value) {
                Some(ch) => out.push(ch),
                None => out.push_str(&token.value),
            },
            TokenKind::Tag => format_tag(&mut out, token, &mut iter),
            // orphan attributes only occur in hand-built streams
            TokenKind::AttrName | TokenKind::AttrValue => format_attr(&mut out, token),
            TokenKind::Word | TokenKind::Newline => out.push_str(&token.value),
        }
    }

    out
}

fn format_tag(out: &mut String, tag: &Token, iter: &mut Peekable<Iter<'_, Token>>) {
    out.push(OPEN_BRACKET);
    out.push_str(&tag.value);

    while let Some(attr) = iter.next_if(|t| t.is_attr_name() || t.is_attr_value()) {
        format_attr(out, attr);
    }

    out.push(CLOSE_BRACKET);
}

fn format_attr(out: &mut String, attr: &Token) {
    if attr.is_attr_name() {
        out.push(SPACE);
        out.push_str(&attr.value);
    } else {
        out.push(EQUALS);
        out.push(QUOTE);
        out.push_str(&attr.value);
        out.push(QUOTE);
    }
}
