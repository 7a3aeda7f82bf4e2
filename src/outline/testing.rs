//! Testing utilities
//!
//!     Grammar snippets in tests are small and written inline: unlike prose formats, a grammar
//!     rule is easy to get right by hand. What is tedious is spelling out expected tokens with
//!     their spans, and walking rule alternatives down to their texts. The helpers here keep
//!     test bodies focused on the expectation.
//!
//!     - [factories] build expected token buffers succinctly.
//!     - [alternative_texts] and [parse_rules] flatten analyzer output to plain strings.

use crate::outline::lexing::tokenize;
use crate::outline::parsing::analyze;

pub mod factories {
    //! Test factories for creating spanned tokens succinctly

    use crate::outline::token::{Token, TokenKind};

    /// Make a single spanned token
    pub fn mk_token(
        kind: TokenKind,
        text: &'static str,
        start: usize,
        end: usize,
        line: usize,
    ) -> Token<'static> {
        Token::new(kind, text, start..end, line)
    }

    /// Make a vector of spanned tokens from a list of (kind, text, start, end, line)
    pub fn mk_tokens(
        specs: &[(TokenKind, &'static str, usize, usize, usize)],
    ) -> Vec<Token<'static>> {
        specs
            .iter()
            .map(|&(kind, text, start, end, line)| mk_token(kind, text, start, end, line))
            .collect()
    }
}

/// Each alternative of `rule` as the list of its token texts
pub fn alternative_texts<'a>(rule: &crate::outline::ast::Rule<'a>) -> Vec<Vec<&'a str>> {
    rule.alternatives()
        .iter()
        .map(|alternative| alternative.iter().map(|token| token.text).collect())
        .collect()
}

/// Tokenize and analyze `source`, returning the names of the matched rules in order
pub fn parse_rules(source: &str) -> Vec<String> {
    let tokenized = tokenize(source);
    let outline = analyze(tokenized.tokens());
    outline
        .rules()
        .iter()
        .map(|rule| rule.name().to_string())
        .collect()
}
