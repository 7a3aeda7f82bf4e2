//! # grammar-outline
//!
//! A tolerant tokenizer and structural analyzer for ANTLR-style grammars, producing the rule and
//! group outline an editor needs for folding, navigation and quick fixes.
//!
//! ```text
//! let tokenized = tokenize(source);
//! let outline = analyze(tokenized.tokens());
//! for rule in outline.left_recursive_rules() {
//!     println!("{} : {} ;", rule.name(), rule.eliminate_left_recursion());
//! }
//! ```
//!
//! ## Testing
//!
//! Shared helpers for building expected tokens and flattening rules live in the
//! [testing module](outline::testing).

pub mod outline;

pub use outline::ast::{GrammarOutline, Group, Rule};
pub use outline::lexing::{tokenize, TokenizedSource};
pub use outline::parsing::{analyze, Analyzer};
