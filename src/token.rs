use std::fmt;
use std::str::FromStr;

use crate::chars::{CLOSE_BRACKET, OPEN_BRACKET, PLACEHOLDER_SPACE, SLASH};

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Run of plain text, or degraded tag markup.
    Word,
    /// Bracketed tag name, e.g. `b` or `/b`.
    Tag,
    /// Attribute name inside a tag.
    AttrName,
    /// Attribute value inside a tag.
    AttrValue,
    /// A single space or tab, stored as a placeholder.
    Space,
    /// Line feed.
    Newline,
}

impl TokenKind {
    /// Stable name of the kind, as exposed to token consumers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Tag => "tag",
            Self::AttrName => "attr-name",
            Self::AttrValue => "attr-value",
            Self::Space => "space",
            Self::Newline => "new-line",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown token kind name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown token kind: {name}")]
pub struct ParseTokenKindError {
    pub name: String,
}

impl FromStr for TokenKind {
    type Err = ParseTokenKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "word" => Ok(Self::Word),
            "tag" => Ok(Self::Tag),
            "attr-name" => Ok(Self::AttrName),
            "attr-value" => Ok(Self::AttrValue),
            "space" => Ok(Self::Space),
            "new-line" => Ok(Self::Newline),
            _ => Err(ParseTokenKindError {
                name: s.to_string(),
            }),
        }
    }
}

/// A single token with its kind, text, and source position.
///
/// `line` and `column` are zero-based and count characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, value: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            value: value.into(),
            line,
            column,
        }
    }

    /// Word, space, or newline.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Word | TokenKind::Space | TokenKind::Newline
        )
    }

    #[must_use]
    pub const fn is_tag(&self) -> bool {
        matches!(self.kind, TokenKind::Tag)
    }

    #[must_use]
    pub const fn is_attr_name(&self) -> bool {
        matches!(self.kind, TokenKind::AttrName)
    }

    #[must_use]
    pub const fn is_attr_value(&self) -> bool {
        matches!(self.kind, TokenKind::AttrValue)
    }

    /// Opening tag such as `[b]`.
    #[must_use]
    pub fn is_start(&self) -> bool {
        self.is_tag() && !self.value.starts_with(SLASH)
    }

    /// Closing tag such as `[/b]`.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.is_tag() && self.value.starts_with(SLASH)
    }

    /// Tag name without the closing slash or any folded attribute text.
    ///
    /// Returns `None` for non-tag tokens.
    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        if !self.is_tag() {
            return None;
        }
        let name = self.value.strip_prefix(SLASH).unwrap_or(&self.value);
        Some(
            name.split_once(PLACEHOLDER_SPACE)
                .map_or(name, |(head, _)| head),
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_tag() {
            write!(f, "{OPEN_BRACKET}{}{CLOSE_BRACKET}", self.value)
        } else {
            f.write_str(&self.value)
        }
    }
}
