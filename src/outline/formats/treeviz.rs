//! Treeviz formatter for grammar outlines
//!
//! One line per node, nesting drawn with box characters, 2 columns per level:
//!
//!     <line number> <prefix><connector> <icon> <label>
//!
//! Labels are truncated to 40 characters. Groups are placed between rules according to their
//! anchor, which reproduces their position in the source.
//!
//!     ⧉ 2 rules, 2 groups
//!     ├─ ▼ Expressions
//!     ├─ ≔ expr
//!     │ ├─ • expr '+' term
//!     │ ├─ • term
//!     │ └─ ↻ (term) ('+' term)*
//!     ├─ ℒ INT
//!     │ └─ • [ 0 - 9 ] +
//!     └─ ▲ end
//!
//! Icons
//!     Outline: ⧉
//!     ParserRule: ≔
//!     LexerRule: ℒ
//!     Alternative: •
//!     Rewrite: ↻
//!     Error: ⚠
//!     GroupOpen: ▼
//!     GroupClose: ▲

use super::registry::{FormatError, Formatter};
use crate::outline::ast::{GroupKind, GroupSnapshot, OutlineSnapshot, RuleSnapshot};

const MAX_LABEL_CHARS: usize = 40;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

struct Node {
    icon: &'static str,
    label: String,
    line: usize,
    children: Vec<Node>,
}

impl Node {
    fn leaf(icon: &'static str, label: impl Into<String>, line: usize) -> Self {
        Self {
            icon,
            label: label.into(),
            line,
            children: Vec::new(),
        }
    }
}

fn rule_node(rule: &RuleSnapshot) -> Node {
    let line = rule.start.line;
    let mut children: Vec<Node> = rule
        .alternatives
        .iter()
        .map(|alternative| {
            let label = if alternative.is_empty() {
                "ε"
            } else {
                alternative.as_str()
            };
            Node::leaf("•", label, line)
        })
        .collect();
    if let Some(rewrite) = &rule.rewrite {
        children.push(Node::leaf("↻", rewrite.as_str(), line));
    }
    children.extend(
        rule.errors
            .iter()
            .map(|error| Node::leaf("⚠", error.as_str(), line)),
    );

    Node {
        icon: if rule.lexer_rule { "ℒ" } else { "≔" },
        label: rule.name.clone(),
        line,
        children,
    }
}

fn group_node(group: &GroupSnapshot) -> Node {
    match group.kind {
        GroupKind::Open => Node::leaf("▼", group.name.as_deref().unwrap_or(""), group.line),
        GroupKind::Close => Node::leaf("▲", "end", group.line),
    }
}

/// Rules and groups merged in source order
fn top_level_nodes(snapshot: &OutlineSnapshot) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut groups = snapshot.groups.iter().peekable();

    while let Some(group) = groups.next_if(|group| group.anchor.is_none()) {
        nodes.push(group_node(group));
    }
    for (index, rule) in snapshot.rules.iter().enumerate() {
        nodes.push(rule_node(rule));
        while let Some(group) = groups.next_if(|group| group.anchor == Some(index)) {
            nodes.push(group_node(group));
        }
    }
    // Anchors are non-decreasing, so nothing is left unless the snapshot was built by hand
    nodes.extend(groups.map(group_node));
    nodes
}

fn format_node(
    node: &Node,
    prefix: &str,
    child_index: usize,
    child_count: usize,
    show_linum: bool,
    output: &mut String,
) {
    let is_last = child_index == child_count - 1;
    let connector = if is_last { "└─" } else { "├─" };

    if show_linum {
        output.push_str(&format!("{:02} ", node.line));
    }
    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        node.icon,
        truncate(&node.label, MAX_LABEL_CHARS)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let child_count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        format_node(child, &child_prefix, i, child_count, show_linum, output);
    }
}

fn format_outline_snapshot(snapshot: &OutlineSnapshot, show_linum: bool) -> String {
    let mut output = format!(
        "⧉ {} rules, {} groups\n",
        snapshot.rules.len(),
        snapshot.groups.len()
    );

    let nodes = top_level_nodes(snapshot);
    let count = nodes.len();
    for (i, node) in nodes.iter().enumerate() {
        format_node(node, "", i, count, show_linum, &mut output);
    }

    output
}

pub fn to_treeviz_str(snapshot: &OutlineSnapshot) -> String {
    format_outline_snapshot(snapshot, false)
}

/// Formatter implementation for treeviz format
#[derive(Debug, Clone, Copy, Default)]
pub struct TreevizFormatter {
    pub show_line_numbers: bool,
}

impl TreevizFormatter {
    pub fn with_line_numbers() -> Self {
        Self {
            show_line_numbers: true,
        }
    }
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, snapshot: &OutlineSnapshot) -> Result<String, FormatError> {
        Ok(format_outline_snapshot(snapshot, self.show_line_numbers))
    }

    fn description(&self) -> &str {
        "Visual tree of rules, alternatives and groups"
    }
}
