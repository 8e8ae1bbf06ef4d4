//! Expression parsing by precedence climbing

use crate::ast::*;
use crate::lexer::{TokenKind, TokenValue};

use super::{ParseResult, Parser};

/// Infix operator recognised by the expression parser
#[derive(Debug, Clone, Copy)]
enum Infix {
    Assign(AssignOperator),
    Binary(BinaryOperator),
}

/// Binding power and meaning of an infix operator token
fn infix_operator(kind: TokenKind) -> Option<(u8, Infix)> {
    let entry = match kind {
        TokenKind::Assign => (1, Infix::Assign(AssignOperator::Assign)),
        TokenKind::PlusAssign => (1, Infix::Assign(AssignOperator::PlusAssign)),
        TokenKind::MinusAssign => (1, Infix::Assign(AssignOperator::MinusAssign)),
        TokenKind::TimesAssign => (1, Infix::Assign(AssignOperator::TimesAssign)),
        TokenKind::DivideAssign => (1, Infix::Assign(AssignOperator::DivideAssign)),
        TokenKind::Eq => (2, Infix::Binary(BinaryOperator::Eq)),
        TokenKind::Ne => (2, Infix::Binary(BinaryOperator::Ne)),
        TokenKind::Lt => (2, Infix::Binary(BinaryOperator::Lt)),
        TokenKind::Gt => (2, Infix::Binary(BinaryOperator::Gt)),
        TokenKind::Le => (2, Infix::Binary(BinaryOperator::Le)),
        TokenKind::Ge => (2, Infix::Binary(BinaryOperator::Ge)),
        TokenKind::Plus => (3, Infix::Binary(BinaryOperator::Plus)),
        TokenKind::Minus => (3, Infix::Binary(BinaryOperator::Minus)),
        TokenKind::Times => (4, Infix::Binary(BinaryOperator::Times)),
        TokenKind::Divide => (4, Infix::Binary(BinaryOperator::Divide)),
        _ => return None,
    };
    Some(entry)
}

impl<'a> Parser<'a> {
    /// Parses an expression whose operators all bind tighter than
    /// `min_precedence`; `0` parses a full expression.
    ///
    /// Arithmetic and comparison operators associate to the left, the
    /// assignment family to the right.
    pub fn parse_expression(&mut self, min_precedence: u8) -> ParseResult<Expression> {
        let mut left = self.parse_unary()?;

        while let Some((op_precedence, infix)) = infix_operator(self.current.kind) {
            if op_precedence <= min_precedence {
                break;
            }
            self.eat(None)?;
            let location = left.location().cloned();

            left = match infix {
                Infix::Assign(operator) => {
                    let value = self.parse_expression(op_precedence - 1)?;
                    Expression::Assignment(AssignmentExpr {
                        target: Box::new(left),
                        operator,
                        value: Box::new(value),
                        location,
                    })
                }
                Infix::Binary(operator) => {
                    let right = self.parse_expression(op_precedence)?;
                    Expression::BinaryOp(BinaryOp {
                        left: Box::new(left),
                        operator,
                        right: Box::new(right),
                        location,
                    })
                }
            };
        }

        Ok(left)
    }

    /// Prefix `-` and `!`
    fn parse_unary(&mut self) -> ParseResult<Expression> {
        let operator = match self.current.kind {
            TokenKind::Minus => UnaryOperator::Minus,
            TokenKind::Not => UnaryOperator::Not,
            _ => return self.parse_primary(),
        };
        let location = self.location();
        self.eat(None)?;
        let operand = self.parse_unary()?;
        Ok(Expression::UnaryOp(UnaryOp {
            operator,
            operand: Box::new(operand),
            location,
        }))
    }

    fn parse_primary(&mut self) -> ParseResult<Expression> {
        let location = self.location();

        match self.current.kind {
            kind if kind.is_literal() => {
                let token = self.eat(None)?;
                let value = match token.value {
                    TokenValue::Integer(n) => LiteralValue::Integer(n),
                    TokenValue::Float(n) => LiteralValue::Float(n),
                    TokenValue::String(s) => LiteralValue::String(s),
                    TokenValue::Bool(b) => LiteralValue::Bool(b),
                    TokenValue::None | TokenValue::Identifier(_) => {
                        return Err(self.error_at(&token, "Malformed literal token"));
                    }
                };
                Ok(Expression::Literal(Literal {
                    literal_type: value.literal_type(),
                    value,
                    location,
                }))
            }
            TokenKind::Identifier => {
                let name = self.expect_identifier("identifier")?;
                let expr = Expression::Identifier(Identifier {
                    name,
                    location: location.clone(),
                });
                self.parse_postfix(expr, location)
            }
            TokenKind::LParen => {
                self.eat(None)?;
                let expr = self.parse_expression(0)?;
                self.expect(TokenKind::RParen)?;
                Ok(expr)
            }
            kind => Err(self.error(format!("Unexpected token {}", kind))),
        }
    }

    /// `.member` and `(args)` suffixes after an identifier
    fn parse_postfix(
        &mut self,
        mut expr: Expression,
        location: Option<SourceLocation>,
    ) -> ParseResult<Expression> {
        loop {
            match self.current.kind {
                TokenKind::Dot => {
                    self.eat(None)?;
                    let member_location = self.location();
                    let name = self.expect_identifier("identifier after '.'")?;
                    expr = Expression::MemberAccess(MemberAccess {
                        object: Box::new(expr),
                        member: Identifier {
                            name,
                            location: member_location,
                        },
                        location: location.clone(),
                    });
                }
                TokenKind::LParen => {
                    let arguments = self.parse_arguments()?;
                    expr = Expression::FunctionCall(FunctionCall {
                        function: Box::new(expr),
                        arguments,
                        location: location.clone(),
                    });
                }
                _ => return Ok(expr),
            }
        }
    }

    /// `( [expr {, expr}] )`
    pub(super) fn parse_arguments(&mut self) -> ParseResult<Vec<Expression>> {
        self.expect(TokenKind::LParen)?;
        let mut arguments = Vec::new();
        if !self.check(TokenKind::RParen) {
            loop {
                arguments.push(self.parse_expression(0)?);
                if !self.match_token(TokenKind::Comma)? {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen)?;
        Ok(arguments)
    }
}
