//! Positions and the line table
//!
//! Tokens, rules and groups only carry byte offsets and 1-based line numbers. Editors want
//! line:column pairs; [LineTable] converts between the two.
//!
//! ## Key Design
//!
//! - **Rebuilt every parse**: the table is computed from the same text the tokens come from
//! - **1-based**: both lines and columns start at 1, matching [Token::line](crate::outline::token::Token)
//! - **Unicode-aware**: columns count characters, not bytes
//! - **Efficient conversion**: O(log n) binary search for offset-to-line conversion

use serde::Serialize;
use std::fmt;

/// A line:column position in source text, both 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// Byte offsets of every line start, for offset to line/column conversion
#[derive(Debug, Clone)]
pub struct LineTable<'a> {
    source: &'a str,
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl<'a> LineTable<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self {
            source,
            line_starts,
        }
    }

    /// 1-based line containing `offset`. Offsets past the end map to the last line.
    pub fn line_of(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(index) => index + 1,
            Err(index) => index,
        }
    }

    /// Convert a byte offset to a line/column position
    pub fn position(&self, offset: usize) -> Position {
        let offset = self.floor_char_boundary(offset);
        let line = self.line_of(offset);
        let line_start = self.line_starts[line - 1];
        let column = self.source[line_start..offset].chars().count() + 1;
        Position::new(line, column)
    }

    /// Total number of lines, which is also the highest line number any token can have.
    /// An empty text still has one line.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset where the 1-based `line` starts
    pub fn line_start(&self, line: usize) -> Option<usize> {
        line.checked_sub(1)
            .and_then(|index| self.line_starts.get(index))
            .copied()
    }

    /// Text of the 1-based `line`, without its line terminator
    pub fn line_text(&self, line: usize) -> Option<&'a str> {
        let start = self.line_start(line)?;
        let end = self
            .line_start(line + 1)
            .unwrap_or(self.source.len());
        Some(self.source[start..end].trim_end_matches(['\r', '\n']))
    }

    fn floor_char_boundary(&self, offset: usize) -> usize {
        let mut offset = offset.min(self.source.len());
        while !self.source.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }
}
