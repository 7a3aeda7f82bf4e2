//! Structural analyzer
//!
//!     Turns the token buffer into the rule and group lists of a [GrammarOutline]. It is not a
//!     grammar parser: it only finds where rules start and end, and which comments are fold
//!     markers. Everything finer grained is derived lazily by [Rule](crate::outline::ast::Rule).
//!
//! The Walk
//!
//!     One forward pass with a single cursor and one token of lookahead. At each token:
//!
//!         1. `options { ... }` and `tokens { ... }` headers are skipped as a pair.
//!         2. An identifier starts a rule candidate (`fragment` takes its name from the next
//!            identifier). The candidate needs a colon before any semicolon, and then a
//!            semicolon, which ends the rule.
//!         3. A single-line comment starting with a group marker prefix becomes a [Group]
//!            anchored to the last rule completed so far.
//!
//! Tolerance
//!
//!     The text being analyzed is usually half typed. A candidate that hits a semicolon before
//!     its colon, or the end of input before its semicolon, is dropped silently and the walk
//!     goes on after the tokens it scanned. Nothing here returns an error: a dropped candidate
//!     is just an absent rule, and re-analyzing once the user types the `;` picks it up.

pub mod cursor;
pub mod markers;

pub use cursor::TokenCursor;
pub use markers::{GroupMarkers, BEGIN_GROUP, END_GROUP, FRAGMENT};

use crate::outline::ast::{GrammarOutline, Group, Rule};
use crate::outline::token::{Token, TokenKind};
use tracing::{debug, trace};

/// Finds rules and group markers in a token buffer
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    markers: GroupMarkers,
}

impl Analyzer {
    pub fn new(markers: GroupMarkers) -> Self {
        Self { markers }
    }

    pub fn markers(&self) -> &GroupMarkers {
        &self.markers
    }

    pub fn analyze<'a>(&self, tokens: &'a [Token<'a>]) -> GrammarOutline<'a> {
        let mut rules = Vec::new();
        let mut groups = Vec::new();
        let mut cursor = TokenCursor::new(tokens);

        while let Some(token) = cursor.current() {
            if !skip_header_block(&mut cursor) {
                match token.kind {
                    TokenKind::Identifier => {
                        if let Some(rule) = match_rule(&mut cursor) {
                            rules.push(rule);
                        }
                    }
                    TokenKind::SingleLineComment => {
                        if let Some(group) = self.match_group(&cursor, rules.len()) {
                            groups.push(group);
                        }
                    }
                    _ => {}
                }
            }
            cursor.advance();
        }

        debug!(
            tokens = tokens.len(),
            rules = rules.len(),
            groups = groups.len(),
            "analyzed grammar outline"
        );
        GrammarOutline::new(rules, groups)
    }

    fn match_group<'a>(&self, cursor: &TokenCursor<'a>, rule_count: usize) -> Option<Group<'a>> {
        let token = cursor.current()?;
        let anchor = rule_count.checked_sub(1);

        if let Some(rest) = token.text.strip_prefix(self.markers.begin.as_str()) {
            Some(Group::open(rest.trim_end(), anchor, cursor.index(), token))
        } else if token.text.starts_with(self.markers.end.as_str()) {
            Some(Group::close(anchor, cursor.index(), token))
        } else {
            None
        }
    }
}

/// Analyze with the default group markers
pub fn analyze<'a>(tokens: &'a [Token<'a>]) -> GrammarOutline<'a> {
    Analyzer::default().analyze(tokens)
}

/// Consume an `options { ... }` or `tokens { ... }` header. The cursor is left on the block.
fn skip_header_block(cursor: &mut TokenCursor<'_>) -> bool {
    let Some(token) = cursor.current() else {
        return false;
    };
    if !(token.is_identifier("options") || token.is_identifier("tokens")) {
        return false;
    }
    match cursor.peek() {
        Some(next) if next.is(TokenKind::Block) => {
            cursor.advance();
            true
        }
        _ => false,
    }
}

/// Match a rule starting at the identifier under the cursor. The cursor is left on the last
/// token scanned.
fn match_rule<'a>(cursor: &mut TokenCursor<'a>) -> Option<Rule<'a>> {
    let start = cursor.index();
    let mut name = cursor.current()?.text;

    if name == FRAGMENT {
        match cursor.peek() {
            Some(next) if next.is(TokenKind::Identifier) => {
                cursor.advance();
                name = next.text;
            }
            _ => {
                trace!(index = start, "fragment keyword without a rule name");
                return None;
            }
        }
    }

    loop {
        if !cursor.advance() {
            trace!(rule = name, "rule candidate without colon at end of input");
            return None;
        }
        match cursor.current()?.kind {
            TokenKind::Colon => break,
            TokenKind::Semicolon => {
                trace!(rule = name, "semicolon before colon, not a rule");
                return None;
            }
            _ => {}
        }
    }

    loop {
        if !cursor.advance() {
            trace!(rule = name, "unterminated rule at end of input");
            return None;
        }
        if cursor.current()?.is(TokenKind::Semicolon) {
            return Some(Rule::new(name, start, cursor.index(), cursor.tokens()));
        }
    }
}
