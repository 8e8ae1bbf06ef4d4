//! Parser module
//!
//! Recursive-descent parser turning the token stream into a [`Program`].
//! The work is split across files, all extending the same [`Parser`]:
//!
//! - `parser_impl`: token cursor (`eat`, speculative `peek`), errors,
//!   recovery and the top-level driver
//! - `expr_parser`: precedence climbing over binary and assignment operators
//! - `stmt_parser`: statements and mixed statement/declaration blocks
//! - `decl_parser`: modifiers, type/shard/impl/function/variable definitions
//!
//! Syntax errors inside a top-level declaration are collected and parsing
//! resumes at the next recovery token:
//!
//! ```text
//! }                  <- diagnostic, skipped
//! type Point;        <- still parsed
//! ```
//!
//! [`Program`]: crate::ast::Program

mod decl_parser;
mod expr_parser;
mod parser_impl;
mod stmt_parser;

pub use parser_impl::Parser;

use crate::error::ParserError;
use crate::lexer::TokenKind;

pub type ParseError = ParserError;
pub type ParseResult<T> = Result<T, ParseError>;

/// Tokens at which the top-level driver resumes after a syntax error
pub const TOP_LEVEL_RECOVERY: &[TokenKind] = &[
    TokenKind::Type,
    TokenKind::Shard,
    TokenKind::Impl,
    TokenKind::Identifier,
    TokenKind::Pub,
    TokenKind::Priv,
    TokenKind::Internal,
    TokenKind::Open,
    TokenKind::Const,
    TokenKind::Mut,
    TokenKind::Pure,
    TokenKind::Impure,
    TokenKind::Meta,
    TokenKind::Bus,
    TokenKind::On,
];
