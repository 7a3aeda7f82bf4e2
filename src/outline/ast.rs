//! Outline entities
//!
//!     The outline of a grammar is flat: a list of rules and a list of group markers, both in
//!     source order. There is no tree. Folding structure comes from the group markers the user
//!     writes, not from nesting in the grammar.
//!
//!     See [Rule](rule::Rule) for rule boundaries and the derived queries (alternatives, blocks,
//!     left recursion), [Group](group::Group) for fold markers, and
//!     [GrammarOutline](outline::GrammarOutline) for the container.
//!
//! Ownership
//!
//!     The token buffer belongs to the [TokenizedSource](crate::outline::lexing::TokenizedSource).
//!     Rules and groups keep token indices plus a shared borrow of that buffer, never copies. A
//!     new parse produces a new buffer and new entities; nothing is updated in place.
//!
//! Location
//!
//!     Tokens carry byte spans and 1-based lines. [LineTable](range::LineTable) converts offsets
//!     to line:column [Position](range::Position)s for tooling.

pub mod diagnostics;
pub mod group;
pub mod left_recursion;
pub mod outline;
pub mod range;
pub mod rule;
pub mod snapshot;

pub use diagnostics::{DiagnosticSeverity, RuleDiagnostic};
pub use group::{Group, GroupKind};
pub use outline::GrammarOutline;
pub use range::{LineTable, Position};
pub use rule::{Alternative, Rule};
pub use snapshot::{snapshot_from_outline, GroupSnapshot, OutlineSnapshot, RuleSnapshot};
