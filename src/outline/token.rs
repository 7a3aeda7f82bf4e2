//! Token types shared by the lexer, the analyzer, and the output formats.
//!
//!     Core Kinds:
//!         Produced by the logos lexer, see [core]. Whitespace is skipped; comments, literals and
//!         brace blocks are single tokens.
//!
//!     Spanned Tokens:
//!         A kind plus its source slice, byte span and line, see [spanned]. This is what the
//!         analyzer walks and what rules and groups point into.

pub mod core;
pub mod spanned;

pub use core::TokenKind;
pub use spanned::{Token, TokenIndex};
