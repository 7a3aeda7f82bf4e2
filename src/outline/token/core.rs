//! Core token kinds produced by the logos lexer.
//!
//!     Grammar files mix three worlds: grammar structure (names, `:`, `|`, `;`), literals, and
//!     embedded target-language code inside braces. Only the first matters to the outline, so
//!     action code and `options`/`tokens` bodies are swallowed whole as a single [TokenKind::Block]
//!     token. The callbacks below do the balancing that a regular expression can't.
//!
//!     Whitespace is skipped by logos and never becomes a token. Anything logos can't match is
//!     turned into [TokenKind::Unknown] by [tokenize](crate::outline::lexing::tokenize), so every
//!     non-whitespace byte of the input ends up inside some token.

use logos::{Lexer, Logos};
use serde::Serialize;

/// All token kinds of the grammar outline lexer
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    /// Rule names, token references, and keywords such as `fragment`, `options`, `returns`.
    /// Letters and digits of any script, so `règle` is one name.
    #[regex(r"[\p{L}_][\p{L}\p{N}_]*")]
    Identifier,

    #[token(":")]
    Colon,

    #[token(";")]
    Semicolon,

    #[token("|")]
    Pipe,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    /// A whole brace-delimited region, delimiters included
    #[token("{", lex_block)]
    Block,

    /// `//` up to (not including) the line terminator
    #[regex(r"//[^\r\n]*")]
    SingleLineComment,

    #[token("/*", lex_multi_line_comment)]
    MultiLineComment,

    /// `'...'` or `"..."`, quotes included
    #[token("'", lex_single_quoted)]
    #[token("\"", lex_double_quoted)]
    Literal,

    #[regex(r"[0-9]+")]
    Number,

    /// Remaining grammar punctuation: EBNF suffixes, ranges, rewrites, labels, arguments
    #[token("..")]
    #[token("->")]
    #[token("+=")]
    #[regex(r"[*+?=~!^.<>,@$#%&/\\\[\]\-]")]
    Operator,

    /// A character the lexer doesn't recognize, kept verbatim
    Unknown,
}

impl TokenKind {
    pub fn is_comment(&self) -> bool {
        matches!(
            self,
            TokenKind::SingleLineComment | TokenKind::MultiLineComment
        )
    }

    /// Kinds that never take part in alternative shape analysis
    pub fn is_opaque(&self) -> bool {
        matches!(self, TokenKind::Block) || self.is_comment()
    }
}

fn lex_block(lex: &mut Lexer<TokenKind>) -> bool {
    let consumed = scan_block_body(lex.remainder());
    lex.bump(consumed);
    true
}

fn lex_multi_line_comment(lex: &mut Lexer<TokenKind>) -> bool {
    let rest = lex.remainder();
    let consumed = rest.find("*/").map(|i| i + 2).unwrap_or(rest.len());
    lex.bump(consumed);
    true
}

fn lex_single_quoted(lex: &mut Lexer<TokenKind>) -> bool {
    let consumed = scan_quoted(lex.remainder(), '\'');
    lex.bump(consumed);
    true
}

fn lex_double_quoted(lex: &mut Lexer<TokenKind>) -> bool {
    let consumed = scan_quoted(lex.remainder(), '"');
    lex.bump(consumed);
    true
}

/// Length of a quoted literal body after its opening quote, closing quote included.
///
/// Backslash escapes the next character. An unterminated literal stops before the line
/// terminator, or at the end of input.
pub(crate) fn scan_quoted(rest: &str, quote: char) -> usize {
    let mut chars = rest.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '\r' | '\n' => return i,
            c if c == quote => return i + c.len_utf8(),
            _ => {}
        }
    }
    rest.len()
}

/// Length of a block body after its opening brace, closing brace included.
///
/// Nested braces balance. Braces inside quoted literals and comments of the embedded code
/// don't count. An unterminated block runs to the end of input.
pub(crate) fn scan_block_body(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    let mut depth = 1usize;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return i + 1;
                }
            }
            quote @ (b'\'' | b'"') => {
                i += 1 + scan_quoted(&rest[i + 1..], quote as char);
                continue;
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                i = rest[i..].find('\n').map(|n| i + n).unwrap_or(bytes.len());
                continue;
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i = rest[i + 2..]
                    .find("*/")
                    .map(|n| i + 2 + n + 2)
                    .unwrap_or(bytes.len());
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    bytes.len()
}
