//! Character classification for the scanner.
//!
//! Every input character falls into exactly one [`CharClass`]; the
//! scanner dispatches on the class instead of comparing raw characters.

pub const OPEN_BRACKET: char = '[';
pub const CLOSE_BRACKET: char = ']';
pub const EQUALS: char = '=';
pub const QUOTE: char = '"';
pub const SLASH: char = '/';
pub const NEWLINE: char = '\n';
pub const TAB: char = '\t';
pub const SPACE: char = ' ';

/// Payload of a SPACE token produced by a literal space.
pub const PLACEHOLDER_SPACE: &str = " ";

/// Payload of a SPACE token produced by a literal tab.
pub const PLACEHOLDER_SPACE_TAB: &str = "    ";

/// Dispatch category of a single input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// `' '` or `'\t'`.
    TabOrSpace,
    /// `'\n'`.
    Newline,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// `=`
    Equals,
    /// `"`
    Quote,
    /// Anything else, including `'\r'`.
    Other,
}

impl CharClass {
    /// Classify a character.
    #[must_use]
    pub const fn of(ch: char) -> Self {
        match ch {
            TAB | SPACE => Self::TabOrSpace,
            NEWLINE => Self::Newline,
            OPEN_BRACKET => Self::OpenBracket,
            CLOSE_BRACKET => Self::CloseBracket,
            EQUALS => Self::Equals,
            QUOTE => Self::Quote,
            _ => Self::Other,
        }
    }
}

/// Placeholder stored in a SPACE token for the given whitespace character.
#[must_use]
pub const fn placeholder_for(ch: char) -> &'static str {
    if ch == TAB {
        PLACEHOLDER_SPACE_TAB
    } else {
        PLACEHOLDER_SPACE
    }
}

/// Map a SPACE token payload back to the whitespace it stands for.
#[must_use]
pub fn restore_placeholder(value: &str) -> Option<char> {
    match value {
        PLACEHOLDER_SPACE => Some(SPACE),
        PLACEHOLDER_SPACE_TAB => Some(TAB),
        _ => None,
    }
}
