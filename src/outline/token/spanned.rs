//! Tokens as handed to the analyzer: a kind plus the exact source slice and where it sits.

use super::core::TokenKind;
use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// Index of a token inside the token buffer of one parse
pub type TokenIndex = usize;

/// A single lexical token borrowing its text from the source.
///
/// Tokens are created once by [tokenize](crate::outline::lexing::tokenize) and never change.
/// Rules and groups refer to them by [TokenIndex].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub kind: TokenKind,

    /// The exact source substring covered by the token.
    pub text: &'a str,

    /// Byte range in the source, half-open.
    pub span: Range<usize>,

    /// 1-based line of `span.start`.
    pub line: usize,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str, span: Range<usize>, line: usize) -> Self {
        Self {
            kind,
            text,
            span,
            line,
        }
    }

    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// True for an identifier whose text is exactly `word`
    pub fn is_identifier(&self, word: &str) -> bool {
        self.kind == TokenKind::Identifier && self.text == word
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:?} {}..{} {:?}",
            self.line, self.kind, self.span.start, self.span.end, self.text
        )
    }
}
