//! The result of one analysis: rules and groups in source order.

use super::group::Group;
use super::range::LineTable;
use super::rule::Rule;
use super::snapshot::{snapshot_from_outline, OutlineSnapshot};

/// Rules and group markers found in one token buffer.
///
/// Built by [Analyzer](crate::outline::parsing::Analyzer); discarded and rebuilt on the next
/// parse. Only the attached rule diagnostics are meant to change afterwards.
#[derive(Debug, Clone, Default)]
pub struct GrammarOutline<'a> {
    rules: Vec<Rule<'a>>,
    groups: Vec<Group<'a>>,
}

impl<'a> GrammarOutline<'a> {
    pub(crate) fn new(rules: Vec<Rule<'a>>, groups: Vec<Group<'a>>) -> Self {
        Self { rules, groups }
    }

    pub fn rules(&self) -> &[Rule<'a>] {
        &self.rules
    }

    /// Mutable access, for attaching diagnostics
    pub fn rules_mut(&mut self) -> &mut [Rule<'a>] {
        &mut self.rules
    }

    pub fn groups(&self) -> &[Group<'a>] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.groups.is_empty()
    }

    /// First rule with the given name
    pub fn rule_named(&self, name: &str) -> Option<&Rule<'a>> {
        self.rules.iter().find(|rule| rule.name() == name)
    }

    pub fn rule_named_mut(&mut self, name: &str) -> Option<&mut Rule<'a>> {
        self.rules.iter_mut().find(|rule| rule.name() == name)
    }

    /// The rule whose text covers `offset`, typically the one under the caret
    pub fn rule_at_offset(&self, offset: usize) -> Option<&Rule<'a>> {
        self.rules.iter().find(|rule| rule.contains_offset(offset))
    }

    pub fn left_recursive_rules(&self) -> impl Iterator<Item = &Rule<'a>> {
        self.rules.iter().filter(|rule| rule.has_left_recursion())
    }

    /// Rules ordered by name, as shown in a rule list
    pub fn sorted_rules(&self) -> Vec<&Rule<'a>> {
        let mut rules: Vec<&Rule<'a>> = self.rules.iter().collect();
        rules.sort();
        rules
    }

    /// The rule a group is anchored to, if any
    pub fn anchor_rule(&self, group: &Group<'a>) -> Option<&Rule<'a>> {
        group.anchor().and_then(|index| self.rules.get(index))
    }

    /// Serializable view with positions resolved through `lines`
    pub fn snapshot(&self, lines: &LineTable<'_>) -> OutlineSnapshot {
        snapshot_from_outline(self, lines)
    }
}
