//! Rule
//!
//!     A rule spans from its name token (or the `fragment` keyword in front of it) to its
//!     terminating semicolon:
//!
//!         fragment DIGIT : '0'..'9' ;
//!         expr : expr '+' term | term ;
//!
//!     A rule stores nothing but its name and the indices of those two tokens. Everything else
//!     (offsets, alternatives, blocks, left recursion) is derived on demand from the shared
//!     token buffer the rule borrows, so building the outline stays cheap even for large
//!     grammars, and queries only pay for the rules the editor actually looks at.
//!
//! Alternatives
//!
//!     The body after the first colon is split on `|` at parenthesis depth zero. Pipes inside a
//!     subrule `( ... )` belong to the enclosing alternative. Blocks and comments don't take part
//!     in the shape analysis: they are dropped from alternatives without splitting them.

use super::diagnostics::RuleDiagnostic;
use super::left_recursion;
use crate::outline::token::{Token, TokenIndex, TokenKind};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Range;

/// One `|`-separated branch of a rule body
pub type Alternative<'a> = Vec<&'a Token<'a>>;

/// A grammar or lexer rule, borrowing the token buffer it was found in
#[derive(Debug, Clone)]
pub struct Rule<'a> {
    name: &'a str,
    start: TokenIndex,
    end: TokenIndex,
    tokens: &'a [Token<'a>],
    errors: Vec<RuleDiagnostic>,
}

impl<'a> Rule<'a> {
    pub(crate) fn new(
        name: &'a str,
        start: TokenIndex,
        end: TokenIndex,
        tokens: &'a [Token<'a>],
    ) -> Self {
        debug_assert!(start < end);
        debug_assert!(tokens[end].is(TokenKind::Semicolon));
        Self {
            name,
            start,
            end,
            tokens,
            errors: Vec::new(),
        }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Lexer rule names are all upper case by convention
    pub fn is_lexer_rule(&self) -> bool {
        self.name == self.name.to_uppercase()
    }

    pub fn start_token_index(&self) -> TokenIndex {
        self.start
    }

    pub fn end_token_index(&self) -> TokenIndex {
        self.end
    }

    /// The name token, or the `fragment` keyword preceding it
    pub fn start_token(&self) -> &'a Token<'a> {
        &self.tokens[self.start]
    }

    /// The terminating semicolon
    pub fn end_token(&self) -> &'a Token<'a> {
        &self.tokens[self.end]
    }

    pub fn start_offset(&self) -> usize {
        self.start_token().start()
    }

    pub fn end_offset(&self) -> usize {
        self.end_token().end()
    }

    /// Length in bytes from the first token to the end of the semicolon
    pub fn length(&self) -> usize {
        self.end_offset() - self.start_offset()
    }

    pub fn span(&self) -> Range<usize> {
        self.start_offset()..self.end_offset()
    }

    pub fn contains_offset(&self, offset: usize) -> bool {
        self.span().contains(&offset)
    }

    /// Tokens from the start token up to, not including, the semicolon
    pub fn tokens(&self) -> &'a [Token<'a>] {
        &self.tokens[self.start..self.end]
    }

    /// Byte range of the rule body: from the token after the first colon to the end of the token
    /// before the semicolon. An empty body gives an empty range at the semicolon.
    ///
    /// `None` if there is no colon, which can't happen for rules built by the analyzer.
    pub fn body_span(&self) -> Option<Range<usize>> {
        let tokens = self.tokens();
        let colon = tokens.iter().position(|token| token.is(TokenKind::Colon))?;
        match tokens.get(colon + 1) {
            Some(first) => {
                let last = &tokens[tokens.len() - 1];
                Some(first.start()..last.end())
            }
            None => {
                let semicolon = self.end_token().start();
                Some(semicolon..semicolon)
            }
        }
    }

    /// Action blocks of the rule. The block of a rule-level `options { ... }` is not action code
    /// and is left out.
    pub fn blocks(&self) -> Vec<&'a Token<'a>> {
        let mut blocks = Vec::new();
        let mut previous: Option<&Token> = None;
        for token in self.tokens() {
            if token.is(TokenKind::Block)
                && !previous.is_some_and(|previous| previous.is_identifier("options"))
            {
                blocks.push(token);
            }
            previous = Some(token);
        }
        blocks
    }

    /// Top-level alternatives of the body, see the module docs
    pub fn alternatives(&self) -> Vec<Alternative<'a>> {
        let tokens = self.tokens();
        let Some(colon) = tokens.iter().position(|token| token.is(TokenKind::Colon)) else {
            return Vec::new();
        };

        let mut alternatives = Vec::new();
        let mut current = Vec::new();
        let mut depth = 0i32;
        for token in &tokens[colon + 1..] {
            match token.kind {
                TokenKind::OpenParen => depth += 1,
                TokenKind::CloseParen => depth -= 1,
                TokenKind::Pipe if depth == 0 => {
                    alternatives.push(std::mem::take(&mut current));
                    continue;
                }
                kind if kind.is_opaque() => continue,
                _ => {}
            }
            current.push(token);
        }
        if !current.is_empty() {
            alternatives.push(current);
        }
        alternatives
    }

    /// Direct left recursion only, see [left_recursion]
    pub fn has_left_recursion(&self) -> bool {
        left_recursion::has_direct_left_recursion(self.name, &self.alternatives())
    }

    /// Suggested body without direct left recursion, e.g. `(INT) ('+' e)*`.
    ///
    /// A textual suggestion only: the rule itself is left untouched.
    pub fn eliminate_left_recursion(&self) -> String {
        left_recursion::eliminate_left_recursion(self.name, &self.alternatives())
    }

    /// Attach the diagnostics computed for this rule by an analysis engine
    pub fn set_errors(&mut self, errors: Vec<RuleDiagnostic>) {
        self.errors = errors;
    }

    pub fn errors(&self) -> &[RuleDiagnostic] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_message_at(&self, index: usize) -> Option<&str> {
        self.errors.get(index).map(|error| error.message.as_str())
    }

    /// All attached messages in order, one per line
    pub fn error_message(&self) -> String {
        self.messages().join("\n")
    }

    /// All attached messages in order, as an HTML fragment for tooltips
    pub fn error_message_html(&self) -> String {
        format!("<html>{}</html>", self.messages().join("<br>"))
    }

    fn messages(&self) -> Vec<&str> {
        self.errors
            .iter()
            .map(|error| error.message.as_str())
            .collect()
    }
}

impl fmt::Display for Rule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Rules compare and order by name only, as in a rule list
impl PartialEq for Rule<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Rule<'_> {}

impl PartialOrd for Rule<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rule<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(other.name)
    }
}
