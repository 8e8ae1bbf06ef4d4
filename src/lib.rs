//! Shard language front end
//!
//! Lexer, recovering recursive-descent parser and AST for the Shard
//! language, plus the JSON and alt projections of the tree.
//!
//! ```
//! let output = shard::parse_source("type Point { x: float; y: float; }", "point.sd").unwrap();
//! assert!(output.diagnostics.is_empty());
//! assert_eq!(output.program.declarations.len(), 1);
//! ```

pub mod ast;
pub mod compiler;
pub mod error;
pub mod lexer;
pub mod parser;

// Re-export commonly used types
pub use ast::{Declaration, Expression, Program, Statement};
pub use error::{ErrorCollector, LexerError, ParserError, ShardError, ShardResult};
pub use lexer::{tokenize, Lexer, Token, TokenKind};
pub use parser::{ParseError, ParseResult, Parser};

/// A parsed program together with the syntax errors recovered from
#[derive(Debug)]
pub struct ParseOutput {
    pub program: Program,
    pub diagnostics: Vec<ParserError>,
}

/// Parses `source` in one call. Fails only on a lexical error; syntax errors
/// are returned in [`ParseOutput::diagnostics`].
pub fn parse_source(source: &str, file: &str) -> ParseResult<ParseOutput> {
    let mut parser = Parser::new(source, file)?;
    let program = parser.parse()?;
    Ok(ParseOutput {
        program,
        diagnostics: parser.take_diagnostics(),
    })
}
