//! Outline Snapshot - a serializable view of an outline
//!
//! Rules and groups borrow the token buffer and compute most of their properties lazily. The
//! snapshot resolves all of that once, including line:column positions, so that every output
//! format (treeviz, JSON, YAML) only deals with presentation.

use super::group::GroupKind;
use super::outline::GrammarOutline;
use super::range::{LineTable, Position};
use super::rule::Rule;
use serde::Serialize;
use std::ops::Range;

/// A snapshot of a whole outline in a normalized, serializable form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutlineSnapshot {
    pub line_count: usize,
    pub rules: Vec<RuleSnapshot>,
    pub groups: Vec<GroupSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleSnapshot {
    pub name: String,
    pub lexer_rule: bool,
    pub span: Range<usize>,
    pub start: Position,
    pub end: Position,
    /// Each alternative as its token texts joined by spaces
    pub alternatives: Vec<String>,
    pub blocks: usize,
    pub left_recursive: bool,
    /// Present only for left-recursive rules
    pub rewrite: Option<String>,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSnapshot {
    pub kind: GroupKind,
    pub name: Option<String>,
    pub line: usize,
    pub anchor: Option<usize>,
    /// Name of the anchor rule, for readability
    pub anchor_rule: Option<String>,
}

/// Build the snapshot of `outline`, resolving positions through `lines`
pub fn snapshot_from_outline(outline: &GrammarOutline<'_>, lines: &LineTable<'_>) -> OutlineSnapshot {
    let rules = outline
        .rules()
        .iter()
        .map(|rule| snapshot_rule(rule, lines))
        .collect();

    let groups = outline
        .groups()
        .iter()
        .map(|group| GroupSnapshot {
            kind: group.kind(),
            name: group.name().map(str::to_string),
            line: group.line(),
            anchor: group.anchor(),
            anchor_rule: outline
                .anchor_rule(group)
                .map(|rule| rule.name().to_string()),
        })
        .collect();

    OutlineSnapshot {
        line_count: lines.line_count(),
        rules,
        groups,
    }
}

fn snapshot_rule(rule: &Rule<'_>, lines: &LineTable<'_>) -> RuleSnapshot {
    let alternatives = rule
        .alternatives()
        .iter()
        .map(|alternative| {
            alternative
                .iter()
                .map(|token| token.text)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    let left_recursive = rule.has_left_recursion();

    RuleSnapshot {
        name: rule.name().to_string(),
        lexer_rule: rule.is_lexer_rule(),
        span: rule.span(),
        start: lines.position(rule.start_offset()),
        end: lines.position(rule.end_offset()),
        alternatives,
        blocks: rule.blocks().len(),
        left_recursive,
        rewrite: left_recursive.then(|| rule.eliminate_left_recursion()),
        errors: rule
            .errors()
            .iter()
            .map(|error| error.message.clone())
            .collect(),
    }
}
