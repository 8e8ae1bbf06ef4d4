//! Token definitions

use logos::Logos;
use std::fmt;

use crate::ast::{Modifier, Span};

/// Raw scanner failure, turned into a positioned [`crate::error::LexerError`]
/// by the lexer wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    #[default]
    InvalidCharacter,
    UnterminatedString,
    UnterminatedEscape,
}

/// Token kinds of the Shard language
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(error = LexErrorKind)]
pub enum TokenKind {
    // Keywords
    #[token("type")]
    Type,
    #[token("shard")]
    Shard,
    #[token("impl")]
    Impl,
    #[token("from")]
    From,
    #[token("for")]
    For,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("elif")]
    Elif,
    #[token("switch")]
    Switch,
    #[token("case")]
    Case,
    #[token("while")]
    While,
    #[token("return")]
    Return,
    #[token("as")]
    As,

    // Modifiers
    #[token("pub")]
    Pub,
    #[token("priv")]
    Priv,
    #[token("internal")]
    Internal,
    #[token("open")]
    Open,
    #[token("const")]
    Const,
    #[token("mut")]
    Mut,
    #[token("pure")]
    Pure,
    #[token("impure")]
    Impure,
    #[token("meta")]
    Meta,
    #[token("bus")]
    Bus,
    #[token("on")]
    On,

    // Operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Times,
    #[token("/")]
    Divide,
    #[token("=")]
    Assign,
    #[token("+=")]
    PlusAssign,
    #[token("-=")]
    MinusAssign,
    #[token("*=")]
    TimesAssign,
    #[token("/=")]
    DivideAssign,
    #[token("==")]
    Eq,
    #[token("!=")]
    Ne,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("<=")]
    Le,
    #[token(">=")]
    Ge,
    #[token("!")]
    Not,

    // Punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token("->")]
    Arrow,
    #[token(".")]
    Dot,

    // Literals
    #[regex(r"[0-9]+")]
    Integer,
    #[regex(r"[0-9]+\.[0-9]+")]
    Float,
    #[token("\"", lex_string)]
    String,
    #[token("true")]
    #[token("false")]
    Bool,

    // Keywords win over identifiers of the same length
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", priority = 1)]
    Identifier,

    // Comments
    #[regex(r"//[^\n]*", logos::skip)]
    #[token("/*", skip_block_comment)]
    Comment,

    /// Produced by the lexer wrapper once the input is exhausted
    Eof,
}

/// Scans the rest of a string literal after its opening quote. Escapes are
/// only validated here; decoding happens in `literal_parser`.
fn lex_string(lex: &mut logos::Lexer<TokenKind>) -> Result<(), LexErrorKind> {
    let rest = lex.remainder();
    let mut chars = rest.char_indices();

    while let Some((index, ch)) = chars.next() {
        match ch {
            '"' => {
                lex.bump(index + 1);
                return Ok(());
            }
            '\n' => {
                lex.bump(index);
                return Err(LexErrorKind::UnterminatedString);
            }
            '\\' => {
                if chars.next().is_none() {
                    lex.bump(rest.len());
                    return Err(LexErrorKind::UnterminatedEscape);
                }
            }
            _ => {}
        }
    }

    lex.bump(rest.len());
    Err(LexErrorKind::UnterminatedString)
}

/// Skips a nested `/* ... */` comment. An unterminated comment runs to the
/// end of input.
fn skip_block_comment(lex: &mut logos::Lexer<TokenKind>) -> logos::Skip {
    let bytes = lex.remainder().as_bytes();
    let mut depth = 1usize;
    let mut index = 0;

    while index < bytes.len() && depth > 0 {
        match &bytes[index..] {
            [b'/', b'*', ..] => {
                depth += 1;
                index += 2;
            }
            [b'*', b'/', ..] => {
                depth -= 1;
                index += 2;
            }
            _ => index += 1,
        }
    }

    lex.bump(index);
    logos::Skip
}

impl TokenKind {
    /// Upper-case kind name used in diagnostics and token dumps
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Type => "TYPE",
            TokenKind::Shard => "SHARD",
            TokenKind::Impl => "IMPL",
            TokenKind::From => "FROM",
            TokenKind::For => "FOR",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Elif => "ELIF",
            TokenKind::Switch => "SWITCH",
            TokenKind::Case => "CASE",
            TokenKind::While => "WHILE",
            TokenKind::Return => "RETURN",
            TokenKind::As => "AS",
            TokenKind::Pub => "PUB",
            TokenKind::Priv => "PRIV",
            TokenKind::Internal => "INTERNAL",
            TokenKind::Open => "OPEN",
            TokenKind::Const => "CONST",
            TokenKind::Mut => "MUT",
            TokenKind::Pure => "PURE",
            TokenKind::Impure => "IMPURE",
            TokenKind::Meta => "META",
            TokenKind::Bus => "BUS",
            TokenKind::On => "ON",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Times => "TIMES",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Assign => "ASSIGN",
            TokenKind::PlusAssign => "PLUS_ASSIGN",
            TokenKind::MinusAssign => "MINUS_ASSIGN",
            TokenKind::TimesAssign => "TIMES_ASSIGN",
            TokenKind::DivideAssign => "DIVIDE_ASSIGN",
            TokenKind::Eq => "EQ",
            TokenKind::Ne => "NE",
            TokenKind::Lt => "LT",
            TokenKind::Gt => "GT",
            TokenKind::Le => "LE",
            TokenKind::Ge => "GE",
            TokenKind::Not => "NOT",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Colon => "COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Arrow => "ARROW",
            TokenKind::Dot => "DOT",
            TokenKind::Integer => "INTEGER",
            TokenKind::Float => "FLOAT",
            TokenKind::String => "STRING",
            TokenKind::Bool => "BOOL",
            TokenKind::Identifier => "IDENT",
            TokenKind::Comment => "COMMENT",
            TokenKind::Eof => "EOF",
        }
    }

    /// The modifier this token spells, if it is a modifier keyword
    pub fn as_modifier(self) -> Option<Modifier> {
        match self {
            TokenKind::Pub => Some(Modifier::Pub),
            TokenKind::Priv => Some(Modifier::Priv),
            TokenKind::Internal => Some(Modifier::Internal),
            TokenKind::Open => Some(Modifier::Open),
            TokenKind::Const => Some(Modifier::Const),
            TokenKind::Mut => Some(Modifier::Mut),
            TokenKind::Pure => Some(Modifier::Pure),
            TokenKind::Impure => Some(Modifier::Impure),
            TokenKind::Meta => Some(Modifier::Meta),
            TokenKind::Bus => Some(Modifier::Bus),
            TokenKind::On => Some(Modifier::On),
            _ => None,
        }
    }

    pub fn is_modifier(self) -> bool {
        self.as_modifier().is_some()
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Type
                | TokenKind::Shard
                | TokenKind::Impl
                | TokenKind::From
                | TokenKind::For
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Elif
                | TokenKind::Switch
                | TokenKind::Case
                | TokenKind::While
                | TokenKind::Return
                | TokenKind::As
        )
    }

    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Integer | TokenKind::Float | TokenKind::String | TokenKind::Bool
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decoded payload of a token
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    None,
    Integer(i64),
    Float(f64),
    String(String),
    Bool(bool),
    Identifier(String),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::None => Ok(()),
            TokenValue::Integer(n) => write!(f, "{}", n),
            TokenValue::Float(n) => write!(f, "{:?}", n),
            TokenValue::String(s) => write!(f, "{:?}", s),
            TokenValue::Bool(b) => write!(f, "{}", b),
            TokenValue::Identifier(s) => write!(f, "{}", s),
        }
    }
}

/// A token with its start position and byte span
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub line: usize,
    pub column: usize,
    pub span: Span,
}

impl Token {
    /// Identifier or string text carried by the token
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Identifier(s) | TokenValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            TokenValue::None => write!(f, "{}", self.kind)?,
            _ => write!(f, "{}({})", self.kind, self.value)?,
        }
        write!(f, " at line {}, col {}", self.line, self.column)
    }
}
