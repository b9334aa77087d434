use crate::chars::{
    CLOSE_BRACKET, CharClass, EQUALS, OPEN_BRACKET, PLACEHOLDER_SPACE, QUOTE, SLASH,
    placeholder_for,
};
use crate::options::TokenizerOptions;
use crate::token::{Token, TokenKind};

/// Tokenize BBCode markup into a flat sequence of tokens.
///
/// Never fails: malformed markup degrades to `Word` tokens.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    Tokenizer::new(input).tokenize()
}

/// Report whether the closing counterpart of `token` (`[/name`) appears
/// anywhere in `input`.
///
/// This is a plain substring search. It ignores position and bracket
/// balance, so `[b]` is considered nested if `[/b` occurs before it too.
#[must_use]
pub fn is_token_nested(input: &str, token: &Token) -> bool {
    let mut needle = String::with_capacity(token.value.len() + 2);
    needle.push(OPEN_BRACKET);
    needle.push(SLASH);
    needle.push_str(&token.value);
    input.contains(&needle)
}

/// Single-pass, single-use BBCode scanner.
///
/// Holds one accumulator per token under construction. `None` means the
/// buffer is not open. Attribute buffers are only populated while a tag
/// is open.
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    line: usize,
    column: usize,
    tokens: Vec<Token>,
    word: Option<Token>,
    tag: Option<Token>,
    attr_name: Option<Token>,
    attr_value: Option<Token>,
    pending_attrs: Vec<Token>,
    options: TokenizerOptions<'a>,
}

impl<'a> Tokenizer<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, TokenizerOptions::default())
    }

    #[must_use]
    pub fn with_options(input: &'a str, options: TokenizerOptions<'a>) -> Self {
        Self {
            input,
            line: 0,
            column: 0,
            // one token per character at most
            tokens: Vec::with_capacity(input.len()),
            word: None,
            tag: None,
            attr_name: None,
            attr_value: None,
            pending_attrs: Vec::new(),
            options,
        }
    }

    /// See [`is_token_nested`].
    #[must_use]
    pub fn is_token_nested(&self, token: &Token) -> bool {
        is_token_nested(self.input, token)
    }

    /// Scan the whole input and return the tokens in source order.
    #[must_use]
    #[tracing::instrument(level = "debug", skip_all, fields(len = self.input.len()))]
    pub fn tokenize(mut self) -> Vec<Token> {
        let input = self.input;

        for ch in input.chars() {
            match CharClass::of(ch) {
                CharClass::TabOrSpace => self.on_space(ch),
                CharClass::Newline => self.on_newline(ch),
                CharClass::OpenBracket => self.on_open_bracket(),
                CharClass::CloseBracket => self.on_close_bracket(),
                CharClass::Equals => self.on_equals(),
                CharClass::Quote => self.on_quote(),
                CharClass::Other => self.on_other(ch),
            }
        }

        self.flush_word();
        self.flush_unclosed_tag();

        tracing::debug!(count = self.tokens.len(), "tokenized");
        self.tokens
    }

    // -- Character handlers --

    fn on_space(&mut self, ch: char) {
        self.flush_word();

        if self.tag.is_some() {
            // Replaces any unflushed attribute name.
            self.attr_name = Some(self.open(TokenKind::AttrName));
        } else {
            let space = Token::new(
                TokenKind::Space,
                placeholder_for(ch),
                self.line,
                self.column,
            );
            self.append(space);
        }

        self.column += 1;
    }

    fn on_newline(&mut self, ch: char) {
        self.flush_word();

        let newline = Token::new(TokenKind::Newline, ch, self.line, self.column);
        self.append(newline);

        self.line += 1;
        self.column = 0;
    }

    fn on_open_bracket(&mut self) {
        self.flush_word();
        self.tag = Some(self.open(TokenKind::Tag));

        self.column += 1;
    }

    fn on_close_bracket(&mut self) {
        if self.tag.is_some() {
            self.flush_tag();
            self.flush_attr_names();
            self.flush_attrs();
        } else {
            self.push_word(CLOSE_BRACKET);
        }

        self.column += 1;
    }

    fn on_equals(&mut self) {
        if self.tag.is_some() {
            self.attr_value = Some(self.open(TokenKind::AttrValue));
        } else {
            self.push_word(EQUALS);
        }

        self.column += 1;
    }

    fn on_quote(&mut self) {
        if self.attr_value.as_ref().is_some_and(|v| !v.value.is_empty()) {
            // closing quote: queue the attribute, keep the tag open
            self.flush_attr_names();
        } else if self.tag.is_none() {
            self.push_word(QUOTE);
        }

        self.column += 1;
    }

    fn on_other(&mut self, ch: char) {
        if let Some(value) = self.attr_value.as_mut() {
            value.value.push(ch);
        } else if let Some(name) = self.attr_name.as_mut() {
            name.value.push(ch);
        } else if let Some(tag) = self.tag.as_mut() {
            tag.value.push(ch);
        } else {
            self.push_word(ch);
        }

        self.column += 1;
    }

    // -- Buffers --

    const fn open(&self, kind: TokenKind) -> Token {
        Token {
            kind,
            value: String::new(),
            line: self.line,
            column: self.column,
        }
    }

    fn push_word(&mut self, ch: char) {
        let (line, column) = (self.line, self.column);
        self.word
            .get_or_insert_with(|| Token::new(TokenKind::Word, String::new(), line, column))
            .value
            .push(ch);
    }

    fn append(&mut self, token: Token) {
        tracing::trace!(
            kind = %token.kind,
            value = %token.value,
            line = token.line,
            column = token.column,
            "token"
        );
        self.options.emit(&token);
        self.tokens.push(token);
    }

    // -- Flush protocol --

    fn flush_word(&mut self) {
        if let Some(word) = self.word.take()
            && !word.value.is_empty()
        {
            self.append(word);
        }
    }

    fn flush_tag(&mut self) {
        let Some(mut tag) = self.tag.take() else {
            return;
        };

        if tag.value.is_empty() {
            // `[]` or `[=]`: reproduce the markup as text
            let had_value = self.attr_value.take().is_some();
            let word = self.word.get_or_insert_with(|| {
                Token::new(TokenKind::Word, String::new(), tag.line, tag.column)
            });
            word.value.push(OPEN_BRACKET);
            if had_value {
                word.value.push(EQUALS);
            }
            word.value.push(CLOSE_BRACKET);
            tracing::debug!(
                line = tag.line,
                column = tag.column,
                "empty tag kept as text"
            );
            return;
        }

        if self.attr_value.is_none()
            && let Some(name) = self.attr_name.take()
        {
            tag.value.push_str(PLACEHOLDER_SPACE);
            tag.value.push_str(&name.value);
        }

        self.append(tag);
    }

    fn flush_unclosed_tag(&mut self) {
        let Some(tag) = self.tag.take() else {
            return;
        };

        let mut value = String::with_capacity(tag.value.len() + 2);
        value.push(OPEN_BRACKET);
        value.push_str(&tag.value);
        if self.attr_value.take().is_some() {
            value.push(EQUALS);
        }

        tracing::debug!(
            line = tag.line,
            column = tag.column,
            "unclosed tag kept as text"
        );
        self.append(Token::new(TokenKind::Word, value, tag.line, tag.column));
    }

    fn flush_attr_names(&mut self) {
        if let Some(name) = self.attr_name.take() {
            self.pending_attrs.push(name);
        }
        if let Some(value) = self.attr_value.take() {
            self.pending_attrs.push(value);
        }
    }

    fn flush_attrs(&mut self) {
        let pending = std::mem::take(&mut self.pending_attrs);
        for token in pending {
            self.append(token);
        }
    }
}
