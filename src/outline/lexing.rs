//! Lexer
//!
//!     This module runs the single tokenization pass over a grammar source.
//!
//! Structure:
//!     The tokenization is done through the logos lexer library, see [TokenKind]. This module
//!     wraps it so that the analyzer receives a plain token buffer:
//!
//!         1. Build the line table over the text, so every token gets its 1-based line.
//!         2. Run logos. Characters it can't match become [TokenKind::Unknown] tokens instead
//!            of errors, widened to whole UTF-8 characters.
//!         3. Hand back tokens and line table together as a [TokenizedSource].
//!
//! Tolerance
//!
//!     Grammar text is re-tokenized on every keystroke and is incomplete most of the time.
//!     Tokenization therefore has no error path at all: unterminated blocks, comments and
//!     literals simply run to their natural end, and the whole input is always consumed.

use crate::outline::ast::{LineTable, Position};
use crate::outline::token::{Token, TokenIndex, TokenKind};
use logos::Logos;
use tracing::debug;

/// Tokens of one source text together with its line table
#[derive(Debug, Clone)]
pub struct TokenizedSource<'a> {
    source: &'a str,
    tokens: Vec<Token<'a>>,
    lines: LineTable<'a>,
}

impl<'a> TokenizedSource<'a> {
    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    pub fn token_at(&self, index: TokenIndex) -> Option<&Token<'a>> {
        self.tokens.get(index)
    }

    pub fn lines(&self) -> &LineTable<'a> {
        &self.lines
    }

    /// Highest line number observed in the text
    pub fn max_line(&self) -> usize {
        self.lines.line_count()
    }

    /// Line:column of the start of the token at `index`
    pub fn position_of(&self, index: TokenIndex) -> Option<Position> {
        self.tokens
            .get(index)
            .map(|token| self.lines.position(token.start()))
    }

    pub fn into_tokens(self) -> Vec<Token<'a>> {
        self.tokens
    }
}

/// Tokenize a grammar source. Never fails; see the module docs.
pub fn tokenize(source: &str) -> TokenizedSource<'_> {
    let lines = LineTable::new(source);
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let mut span = lexer.span();
        let kind = match result {
            Ok(kind) => kind,
            Err(()) => {
                let end = next_char_boundary(source, span.start);
                if end > span.end {
                    lexer.bump(end - span.end);
                    span.end = end;
                }
                TokenKind::Unknown
            }
        };
        let line = lines.line_of(span.start);
        tokens.push(Token::new(kind, &source[span.clone()], span, line));
    }

    debug!(
        tokens = tokens.len(),
        lines = lines.line_count(),
        "tokenized grammar source"
    );

    TokenizedSource {
        source,
        tokens,
        lines,
    }
}

fn next_char_boundary(source: &str, offset: usize) -> usize {
    source[offset..]
        .chars()
        .next()
        .map(|c| offset + c.len_utf8())
        .unwrap_or(source.len())
}
