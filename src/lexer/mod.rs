//! Lexical analysis module for the Shard language.
//!
//! The raw scanner is derived with `logos` on [`TokenKind`]; [`Lexer`] wraps
//! it to decode literal values, track line/column positions and support
//! cursor checkpoints for the parser's speculative lookahead.

#[allow(clippy::module_inception)]
mod lexer;
mod literal_parser;
mod token;

use std::fmt;

pub use lexer::{format_tokens, tokenize, Cursor, Lexer};
pub use literal_parser::unescape_string;
pub use token::{LexErrorKind, Token, TokenKind, TokenValue};

/// Line/column of a token start, both 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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
        write!(f, "line {}, column {}", self.line, self.column)
    }
}
