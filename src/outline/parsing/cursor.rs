//! Forward-only cursor over the token buffer with one token of lookahead.

use crate::outline::token::{Token, TokenIndex};

pub struct TokenCursor<'a> {
    tokens: &'a [Token<'a>],
    position: TokenIndex,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [Token<'a>]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    pub fn tokens(&self) -> &'a [Token<'a>] {
        self.tokens
    }

    pub fn index(&self) -> TokenIndex {
        self.position
    }

    pub fn current(&self) -> Option<&'a Token<'a>> {
        self.tokens.get(self.position)
    }

    pub fn peek(&self) -> Option<&'a Token<'a>> {
        self.tokens.get(self.position + 1)
    }

    /// Move to the next token; false once the buffer is exhausted
    pub fn advance(&mut self) -> bool {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
        self.position < self.tokens.len()
    }
}
