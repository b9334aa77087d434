use std::fmt;

use crate::token::Token;

type TokenCallback<'a> = Box<dyn FnMut(&Token) + 'a>;

/// Tokenizer configuration.
#[derive(Default)]
pub struct TokenizerOptions<'a> {
    pub(crate) on_token: Option<TokenCallback<'a>>,
}

impl<'a> TokenizerOptions<'a> {
    /// Options with no callback installed.
    #[must_use]
    pub const fn new() -> Self {
        Self { on_token: None }
    }

    /// Invoke `callback` once per token, in output order, as each token
    /// is finalized.
    #[must_use]
    pub fn on_token(mut self, callback: impl FnMut(&Token) + 'a) -> Self {
        self.on_token = Some(Box::new(callback));
        self
    }

    pub(crate) fn emit(&mut self, token: &Token) {
        if let Some(callback) = self.on_token.as_mut() {
            callback(token);
        }
    }
}

impl fmt::Debug for TokenizerOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenizerOptions")
            .field("on_token", &self.on_token.is_some())
            .finish()
    }
}
