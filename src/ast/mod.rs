//! Abstract Syntax Tree (AST) definitions for the Shard language.
//!
//! Nodes are plain owned data: a parent exclusively owns its children and
//! nothing is shared or mutated once the parser has built it. Every node
//! category is a closed enum so that consumers (the JSON and alt printers,
//! tests, downstream passes) match exhaustively.
//!
//! Serialization produces the JSON projection directly: each node struct is
//! tagged with its node kind under `"type"` and `None` fields are omitted.

mod declarations;
mod expressions;
mod modifiers;
pub mod printer;
mod program;
mod statements;

use serde::Serialize;

pub use declarations::*;
pub use expressions::*;
pub use modifiers::*;
pub use program::*;
pub use statements::*;

/// Byte range in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

impl From<Span> for std::ops::Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

/// Where a node starts in the source: the first token's line, column and
/// byte length, plus the (cosmetic) file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
    pub length: usize,
    pub file: String,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize, length: usize, file: impl Into<String>) -> Self {
        Self {
            line,
            column,
            length,
            file: file.into(),
        }
    }
}
