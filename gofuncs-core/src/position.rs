//! Byte positions and closed ranges over a single source document

use serde::{Deserialize, Serialize};
use std::fmt;

/// A byte offset with its derived line and column
///
/// `offset` is authoritative. Line and column are 1-indexed and only
/// informational; the column counts bytes, not characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(offset: usize, line: u32, column: u32) -> Self {
        Position {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Closed interval `[start, end]` over source bytes
///
/// Both ends are inclusive: for a function the end is the offset of its
/// closing brace, not one past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(start.offset <= end.offset, "range start after end");
        Range { start, end }
    }

    /// Distance between the two ends in bytes; zero for a one-byte range
    pub fn width(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    /// Check whether `offset` lies within the range, boundaries included
    pub fn contains(&self, offset: usize) -> bool {
        self.start.offset <= offset && offset <= self.end.offset
    }

    /// Check whether `other` lies entirely within this range
    pub fn contains_range(&self, other: &Range) -> bool {
        self.start.offset <= other.start.offset && other.end.offset <= self.end.offset
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Offset to line/column resolver for one source text
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset at which each line begins; always starts with 0
    line_starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(
                source
                    .bytes()
                    .enumerate()
                    .filter(|(_, b)| *b == b'\n')
                    .map(|(i, _)| i + 1),
            )
            .collect();
        LineIndex {
            line_starts,
            len: source.len(),
        }
    }

    /// Resolve a byte offset. Offsets past the end clamp to the end of text.
    pub fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.len);
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line - 1];
        Position::new(offset, line as u32, (offset - line_start + 1) as u32)
    }

    /// Byte offset at which the line containing `offset` begins
    pub fn line_start(&self, offset: usize) -> usize {
        self.line_starts[self.position(offset).line as usize - 1]
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
