//! Grammar outline
//!
//!     Structural outline of ANTLR-style grammar text for editor tooling: rule boundaries,
//!     alternatives, action blocks, fold groups and direct left recursion.
//!
//! Pipeline
//!
//!     source text -> [lexing::tokenize] -> token buffer -> [parsing::analyze] -> outline
//!
//!     Both stages are total: any text, however incomplete, produces a token buffer and an
//!     outline. Rules the analyzer can't close are left out rather than reported.
//!
//!     [ast::snapshot_from_outline] turns an outline into plain data for the [formats].
//!
//! The command line side ([config], [error]) is kept apart from the pipeline, which does no I/O.

pub mod ast;
pub mod config;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod testing;
pub mod token;
