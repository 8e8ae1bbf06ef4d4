//! Pull-based lexer with position tracking and rewindable cursor

use logos::Logos;

use super::literal_parser::{parse_float, parse_integer, unescape_string};
use super::token::{LexErrorKind, Token, TokenKind, TokenValue};
use super::Position;
use crate::ast::Span;
use crate::error::LexerError;

/// Resumable lexer state: byte offset plus the line/column at that offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Cursor {
    fn start() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }
}

/// Shard lexer
///
/// Yields one token per `next_token` call and an `EOF` token once the input
/// is exhausted (repeatedly, if asked again).
pub struct Lexer<'a> {
    source: &'a str,
    inner: logos::Lexer<'a, TokenKind>,
    cursor: Cursor,
    done: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            inner: TokenKind::lexer(source),
            cursor: Cursor::start(),
            done: false,
        }
    }

    /// Current cursor, suitable for a later [`Lexer::restore`]
    pub fn checkpoint(&self) -> Cursor {
        self.cursor
    }

    /// Rewinds (or advances) to a cursor previously returned by `checkpoint`
    pub fn restore(&mut self, cursor: Cursor) {
        let mut inner = TokenKind::lexer(self.source);
        inner.bump(cursor.offset);
        self.inner = inner;
        self.cursor = cursor;
        self.done = false;
    }

    /// Raw character lookahead from the cursor, `None` past the end
    pub fn peek_char(&self, ahead: usize) -> Option<char> {
        self.source[self.cursor.offset..].chars().nth(ahead)
    }

    pub fn next_token(&mut self) -> Result<Token, LexerError> {
        let Some(result) = self.inner.next() else {
            self.advance_to(self.source.len());
            return Ok(Token {
                kind: TokenKind::Eof,
                value: TokenValue::None,
                line: self.cursor.line,
                column: self.cursor.column,
                span: Span::new(self.source.len(), self.source.len()),
            });
        };

        let range = self.inner.span();
        self.advance_to(range.start);
        let position = self.cursor.position();
        let span = Span::from(range.clone());
        self.advance_to(range.end);

        let slice = &self.source[range];
        match result {
            Ok(kind) => {
                let value = token_value(kind, slice).ok_or_else(|| LexerError::InvalidNumber {
                    text: slice.to_string(),
                    position,
                    span,
                })?;
                Ok(Token {
                    kind,
                    value,
                    line: position.line,
                    column: position.column,
                    span,
                })
            }
            Err(LexErrorKind::InvalidCharacter) => Err(LexerError::InvalidCharacter {
                ch: slice.chars().next().unwrap_or('\0'),
                position,
                span,
            }),
            Err(LexErrorKind::UnterminatedString) => {
                Err(LexerError::UnterminatedString { position, span })
            }
            Err(LexErrorKind::UnterminatedEscape) => {
                Err(LexerError::UnterminatedEscape { position, span })
            }
        }
    }

    /// Moves line/column forward over `source[cursor.offset..offset]`
    fn advance_to(&mut self, offset: usize) {
        if offset <= self.cursor.offset {
            return;
        }
        for ch in self.source[self.cursor.offset..offset].chars() {
            if ch == '\n' {
                self.cursor.line += 1;
                self.cursor.column = 1;
            } else {
                self.cursor.column += 1;
            }
        }
        self.cursor.offset = offset;
    }
}

fn token_value(kind: TokenKind, slice: &str) -> Option<TokenValue> {
    let value = match kind {
        TokenKind::Integer => TokenValue::Integer(parse_integer(slice)?),
        TokenKind::Float => TokenValue::Float(parse_float(slice)?),
        TokenKind::String => TokenValue::String(unescape_string(&slice[1..slice.len() - 1])),
        TokenKind::Bool => TokenValue::Bool(slice == "true"),
        TokenKind::Identifier => TokenValue::Identifier(slice.to_string()),
        _ => TokenValue::None,
    };
    Some(value)
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, LexerError>;

    /// Ends after yielding `EOF` or the first error
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.next_token();
        if !matches!(&result, Ok(token) if token.kind != TokenKind::Eof) {
            self.done = true;
        }
        Some(result)
    }
}

/// Lexes the whole input, including the trailing `EOF` token
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexerError> {
    Lexer::new(source).collect()
}

/// One token per line: `KIND(value) at line L, col C`
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
