//! Parser state, token cursor utilities and the top-level driver

use crate::ast::*;
use crate::error::ParserError;
use crate::lexer::{Cursor, Lexer, Position, Token, TokenKind};

use super::{ParseError, ParseResult, TOP_LEVEL_RECOVERY};

/// Shard parser
///
/// Owns its lexer and a single lookahead token. Deeper lookahead is done by
/// speculation: the lexer cursor and the current token are saved, tokens are
/// pulled, and the saved state is put back before returning.
pub struct Parser<'a> {
    pub(super) lexer: Lexer<'a>,
    pub(super) current: Token,
    pub(super) file: String,
    pub(super) diagnostics: Vec<ParserError>,
    /// Tokens consumed so far; rewound along with speculation
    pub(super) consumed: usize,
    /// Braces opened and not yet closed by consumed tokens
    pub(super) depth: usize,
}

struct Checkpoint {
    cursor: Cursor,
    current: Token,
    consumed: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `source`, lexing the first token eagerly.
    /// `file` only appears in node locations.
    pub fn new(source: &'a str, file: impl Into<String>) -> ParseResult<Self> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            file: file.into(),
            diagnostics: Vec::new(),
            consumed: 0,
            depth: 0,
        })
    }

    /// Parses a complete program.
    ///
    /// A syntax error abandons the declaration it occurred in: the error is
    /// recorded in [`Parser::diagnostics`], the rest of any body the
    /// declaration opened is skipped, and parsing resumes at the next
    /// top-level recovery token. A lexical error aborts the parse.
    pub fn parse(&mut self) -> ParseResult<Program> {
        let mut declarations = Vec::new();

        while !self.check(TokenKind::Eof) {
            let start = self.consumed;
            let depth = self.depth;
            match self.parse_declaration() {
                Ok(declaration) => declarations.push(declaration),
                Err(err) if err.is_lexical() => return Err(err),
                Err(err) => {
                    log::debug!("recovering from syntax error: {}", err);
                    self.diagnostics.push(err);
                    self.skip_to_depth(depth)?;
                    self.synchronize(TOP_LEVEL_RECOVERY)?;
                    if self.consumed == start {
                        self.eat(None)?;
                    }
                }
            }
        }

        log::debug!(
            "parsed {} declarations with {} diagnostics",
            declarations.len(),
            self.diagnostics.len()
        );
        Ok(Program::new(declarations))
    }

    /// Syntax errors recovered from so far
    pub fn diagnostics(&self) -> &[ParserError] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<ParserError> {
        std::mem::take(&mut self.diagnostics)
    }

    /// The lookahead token
    pub fn current(&self) -> &Token {
        &self.current
    }

    // ==================== token cursor ====================

    /// Consumes the current token and returns it. With `Some(kind)`, fails
    /// without consuming anything unless the current token has that kind.
    pub fn eat(&mut self, expected: Option<TokenKind>) -> ParseResult<Token> {
        if let Some(kind) = expected {
            if self.current.kind != kind {
                return Err(self.unexpected(kind.name()));
            }
        }
        let next = self.lexer.next_token()?;
        self.consumed += 1;
        match self.current.kind {
            TokenKind::LBrace => self.depth += 1,
            TokenKind::RBrace => self.depth = self.depth.saturating_sub(1),
            _ => {}
        }
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Token `ahead` positions forward (`0` is the current token). Leaves no
    /// trace on the parser state.
    pub fn peek(&mut self, ahead: usize) -> ParseResult<Token> {
        if ahead == 0 {
            return Ok(self.current.clone());
        }
        self.speculate(|p| {
            for _ in 0..ahead {
                p.eat(None)?;
            }
            Ok(p.current.clone())
        })
    }

    /// Runs `f` and then rewinds the lexer, the current token and the
    /// consumed count to where they were, whether `f` succeeded or not.
    pub fn speculate<T>(&mut self, f: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        let checkpoint = self.checkpoint();
        let result = f(self);
        log::trace!(
            "speculated {} tokens from line {}, column {}",
            self.consumed - checkpoint.consumed,
            checkpoint.current.line,
            checkpoint.current.column
        );
        self.rewind(checkpoint);
        result
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            cursor: self.lexer.checkpoint(),
            current: self.current.clone(),
            consumed: self.consumed,
            depth: self.depth,
        }
    }

    fn rewind(&mut self, checkpoint: Checkpoint) {
        self.lexer.restore(checkpoint.cursor);
        self.current = checkpoint.current;
        self.consumed = checkpoint.consumed;
        self.depth = checkpoint.depth;
    }

    /// Discards tokens until the current one is in `recovery` or is `EOF`
    pub fn synchronize(&mut self, recovery: &[TokenKind]) -> ParseResult<()> {
        while !self.check(TokenKind::Eof) && !recovery.contains(&self.current.kind) {
            self.eat(None)?;
        }
        Ok(())
    }

    /// Discards tokens until every brace opened above `depth` is closed,
    /// consuming the closing `}` itself
    pub(super) fn skip_to_depth(&mut self, depth: usize) -> ParseResult<()> {
        while self.depth > depth && !self.check(TokenKind::Eof) {
            self.eat(None)?;
        }
        Ok(())
    }

    pub(super) fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Consumes the current token if it has the given kind
    pub(super) fn match_token(&mut self, kind: TokenKind) -> ParseResult<bool> {
        if self.check(kind) {
            self.eat(None)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub(super) fn expect(&mut self, kind: TokenKind) -> ParseResult<Token> {
        self.eat(Some(kind))
    }

    pub(super) fn expect_identifier(&mut self, what: &str) -> ParseResult<String> {
        if !self.check(TokenKind::Identifier) {
            return Err(self.error(format!("Expected {}", what)));
        }
        let token = self.eat(None)?;
        Ok(token.text().unwrap_or_default().to_string())
    }

    /// Identifier or string token used as a name
    pub(super) fn expect_name(&mut self, what: &str) -> ParseResult<String> {
        if !matches!(self.current.kind, TokenKind::Identifier | TokenKind::String) {
            return Err(self.error(format!("Expected {}", what)));
        }
        let token = self.eat(None)?;
        Ok(token.text().unwrap_or_default().to_string())
    }

    pub(super) fn expect_semicolon(&mut self) -> ParseResult<()> {
        if !self.check(TokenKind::Semicolon) {
            return Err(self.error(format!(
                "Expected semicolon at end of statement, got {}",
                self.current.kind
            )));
        }
        self.eat(None)?;
        Ok(())
    }

    /// Kind of the token right after the parenthesized group that follows
    /// the current name token, found by scanning to the matching `)`.
    pub(super) fn token_after_parens(&mut self) -> ParseResult<TokenKind> {
        self.speculate(|p| {
            p.eat(None)?;
            p.expect(TokenKind::LParen)?;
            let mut depth = 1usize;
            while depth > 0 && !p.check(TokenKind::Eof) {
                match p.current.kind {
                    TokenKind::LParen => depth += 1,
                    TokenKind::RParen => depth -= 1,
                    _ => {}
                }
                p.eat(None)?;
            }
            Ok(p.current.kind)
        })
    }

    // ==================== locations and errors ====================

    /// Location of the current token
    pub(super) fn location(&self) -> Option<SourceLocation> {
        self.location_of(&self.current)
    }

    pub(super) fn location_of(&self, token: &Token) -> Option<SourceLocation> {
        Some(SourceLocation::new(
            token.line,
            token.column,
            token.span.len(),
            self.file.as_str(),
        ))
    }

    /// Syntax error at the current token
    pub fn error(&self, message: impl Into<String>) -> ParseError {
        self.error_at(&self.current, message)
    }

    pub(super) fn error_at(&self, token: &Token, message: impl Into<String>) -> ParseError {
        ParserError::SyntaxError {
            message: message.into(),
            position: Position::new(token.line, token.column),
            span: token.span,
        }
    }

    pub(super) fn unexpected(&self, expected: &str) -> ParseError {
        ParserError::UnexpectedToken {
            expected: expected.to_string(),
            found: self.current.kind.name().to_string(),
            position: Position::new(self.current.line, self.current.column),
            span: self.current.span,
        }
    }
}
