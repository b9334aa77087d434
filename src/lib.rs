//! Single-pass BBCode lexer.
//!
//! Turns markup such as `[b]bold[/b]` or `[url=http://x]text[/url]`
//! into a flat, ordered sequence of typed tokens with source positions.
//! The lexer never rejects input: malformed markup comes back as `Word`
//! tokens holding the original characters.
//!
//! # Quick start
//!
//! ```
//! use bbcode_lexer::{TokenKind, tokenize};
//!
//! let tokens = tokenize("[b]hi[/b]");
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(kinds, [TokenKind::Tag, TokenKind::Word, TokenKind::Tag]);
//! assert_eq!(tokens[2].value, "/b");
//! ```
//!
//! ## Observe tokens as they are produced
//!
//! ```
//! use bbcode_lexer::{Tokenizer, TokenizerOptions};
//!
//! let mut names = Vec::new();
//! let options = TokenizerOptions::new().on_token(|t| names.push(t.kind.to_string()));
//! let tokens = Tokenizer::with_options("[i]x[/i]", options).tokenize();
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(names, ["tag", "word", "tag"]);
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(clippy::module_name_repetitions)]

pub mod chars;
pub mod formatter;
pub mod lexer;
pub mod options;
pub mod token;

pub use chars::{CharClass, PLACEHOLDER_SPACE, PLACEHOLDER_SPACE_TAB};
pub use formatter::format;
pub use lexer::{Tokenizer, is_token_nested, tokenize};
pub use options::TokenizerOptions;
pub use token::{ParseTokenKindError, Token, TokenKind};
