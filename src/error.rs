//! Error types and diagnostic reporting
//!
//! Lexer errors are fatal for a parse; parser errors are collected by the
//! recovering top-level driver. Both carry the 1-based position of the
//! offending token and its byte span for `codespan-reporting`.

use crate::ast::Span;
use crate::lexer::Position;
use codespan_reporting::diagnostic::{Diagnostic, Label};
use thiserror::Error;

/// Umbrella error used by the pipeline and the binary
#[derive(Error, Debug, Clone)]
pub enum ShardError {
    #[error(transparent)]
    Lexer(#[from] LexerError),

    #[error(transparent)]
    Parser(#[from] ParserError),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("{0}")]
    Other(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexerError {
    #[error("Invalid character '{ch}' at {position}")]
    InvalidCharacter {
        ch: char,
        position: Position,
        span: Span,
    },

    #[error("Unterminated string at {position}")]
    UnterminatedString { position: Position, span: Span },

    #[error("Unterminated escape sequence at {position}")]
    UnterminatedEscape { position: Position, span: Span },

    #[error("Invalid number literal '{text}' at {position}")]
    InvalidNumber {
        text: String,
        position: Position,
        span: Span,
    },
}

impl LexerError {
    pub fn position(&self) -> Position {
        match self {
            LexerError::InvalidCharacter { position, .. }
            | LexerError::UnterminatedString { position, .. }
            | LexerError::UnterminatedEscape { position, .. }
            | LexerError::InvalidNumber { position, .. } => *position,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            LexerError::InvalidCharacter { span, .. }
            | LexerError::UnterminatedString { span, .. }
            | LexerError::UnterminatedEscape { span, .. }
            | LexerError::InvalidNumber { span, .. } => *span,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParserError {
    #[error("Expected {expected}, got {found} at {position}")]
    UnexpectedToken {
        expected: String,
        found: String,
        position: Position,
        span: Span,
    },

    #[error("{message} at {position}")]
    SyntaxError {
        message: String,
        position: Position,
        span: Span,
    },

    #[error(transparent)]
    Lexer(#[from] LexerError),
}

impl ParserError {
    pub fn position(&self) -> Position {
        match self {
            ParserError::UnexpectedToken { position, .. }
            | ParserError::SyntaxError { position, .. } => *position,
            ParserError::Lexer(e) => e.position(),
        }
    }

    pub fn span(&self) -> Span {
        match self {
            ParserError::UnexpectedToken { span, .. } | ParserError::SyntaxError { span, .. } => {
                *span
            }
            ParserError::Lexer(e) => e.span(),
        }
    }

    pub fn is_lexical(&self) -> bool {
        matches!(self, ParserError::Lexer(_))
    }
}

/// An error bound to a file of the diagnostics database
#[derive(Debug, Clone)]
pub struct DiagnosticError {
    pub error: ShardError,
    pub file_id: usize,
}

impl DiagnosticError {
    pub fn new(error: ShardError, file_id: usize) -> Self {
        Self { error, file_id }
    }

    /// Converts to a `codespan-reporting` diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic<usize> {
        let (message, labels) = match &self.error {
            ShardError::Lexer(e) => {
                let label = match e {
                    LexerError::InvalidCharacter { .. } => "not a valid Shard character",
                    LexerError::UnterminatedString { .. } => "string starts here",
                    LexerError::UnterminatedEscape { .. } => "escape reaches end of input",
                    LexerError::InvalidNumber { .. } => "does not fit in 64 bits",
                };
                (
                    e.to_string(),
                    vec![self.primary(e.span()).with_message(label)],
                )
            }
            ShardError::Parser(e) => {
                let label = match e {
                    ParserError::UnexpectedToken { expected, .. } => format!("expected {}", expected),
                    ParserError::SyntaxError { .. } | ParserError::Lexer(_) => String::new(),
                };
                (e.to_string(), vec![self.primary(e.span()).with_message(label)])
            }
            ShardError::Io(message) => (format!("I/O error: {}", message), vec![]),
            ShardError::Other(message) => (message.clone(), vec![]),
        };

        Diagnostic::error()
            .with_message(message)
            .with_labels(labels)
    }

    fn primary(&self, span: Span) -> Label<usize> {
        Label::primary(self.file_id, span)
    }
}

/// Accumulates errors across pipeline stages
#[derive(Debug, Default)]
pub struct ErrorCollector {
    errors: Vec<DiagnosticError>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, error: ShardError, file_id: usize) {
        self.errors.push(DiagnosticError::new(error, file_id));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[DiagnosticError] {
        &self.errors
    }
}

pub type ShardResult<T> = Result<T, ShardError>;

impl From<std::io::Error> for ShardError {
    fn from(e: std::io::Error) -> Self {
        ShardError::Io(e.to_string())
    }
}
