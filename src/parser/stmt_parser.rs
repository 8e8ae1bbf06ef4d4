//! Statement and block parsing

use crate::ast::*;
use crate::lexer::TokenKind;

use super::{ParseResult, Parser};

impl<'a> Parser<'a> {
    /// Parses one statement, dispatching on the leading token
    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        let call = self.check(TokenKind::Identifier) && self.peek(1)?.kind == TokenKind::LParen;
        match self.current.kind {
            TokenKind::Return => Ok(Statement::Return(self.parse_return_statement()?)),
            TokenKind::If => Ok(Statement::If(self.parse_if_statement()?)),
            TokenKind::While => Ok(Statement::While(self.parse_while_statement()?)),
            TokenKind::Elif | TokenKind::Switch | TokenKind::Case => Err(self.error(format!(
                "reserved keyword '{}' is not supported",
                self.current.kind.name().to_lowercase()
            ))),
            TokenKind::String => {
                let location = self.location();
                let expr = self.parse_expression(0)?;
                self.expect_semicolon()?;
                Ok(Statement::Expression(ExpressionStatement { expr, location }))
            }
            TokenKind::Identifier if call => self.parse_call_statement(),
            _ => {
                let location = self.location();
                let expr = self.parse_expression(0)?;
                self.expect_semicolon()?;
                Ok(Statement::Expression(ExpressionStatement { expr, location }))
            }
        }
    }

    /// `Name(args) as instance;` or any expression statement starting with a
    /// call
    fn parse_call_statement(&mut self) -> ParseResult<Statement> {
        let location = self.location();
        let expr = self.parse_expression(0)?;

        if self.check(TokenKind::As) {
            if let Expression::FunctionCall(call) = expr {
                if let Expression::Identifier(callee) = *call.function {
                    self.eat(None)?;
                    let instance_name = self.expect_identifier("instance name after 'as'")?;
                    self.expect_semicolon()?;
                    return Ok(Statement::Component(ComponentInstantiation {
                        component_type: callee.name,
                        instance_name: Some(instance_name),
                        args: call.arguments,
                        location,
                    }));
                }
            }
            return Err(self.error("Only a call of a named component can be bound with 'as'"));
        }

        self.expect_semicolon()?;
        Ok(Statement::Expression(ExpressionStatement { expr, location }))
    }

    fn parse_return_statement(&mut self) -> ParseResult<ReturnStatement> {
        let location = self.location();
        self.expect(TokenKind::Return)?;
        let value = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expression(0)?)
        };
        self.expect_semicolon()?;
        Ok(ReturnStatement { value, location })
    }

    fn parse_if_statement(&mut self) -> ParseResult<IfStatement> {
        let location = self.location();
        self.expect(TokenKind::If)?;
        let condition = self.parse_condition()?;
        let then_block = self.parse_block()?;
        let else_block = if self.match_token(TokenKind::Else)? {
            Some(self.parse_block()?)
        } else {
            None
        };
        Ok(IfStatement {
            condition,
            then_block,
            else_block,
            location,
        })
    }

    fn parse_while_statement(&mut self) -> ParseResult<WhileStatement> {
        let location = self.location();
        self.expect(TokenKind::While)?;
        let condition = self.parse_condition()?;
        let body = self.parse_block()?;
        Ok(WhileStatement {
            condition,
            body,
            location,
        })
    }

    /// `( expr )`
    fn parse_condition(&mut self) -> ParseResult<Expression> {
        self.expect(TokenKind::LParen)?;
        let condition = self.parse_expression(0)?;
        self.expect(TokenKind::RParen)?;
        Ok(condition)
    }

    /// Parses `{ ... }`: an ordered mix of statements and inline member
    /// declarations.
    pub fn parse_block(&mut self) -> ParseResult<Vec<Statement>> {
        self.expect(TokenKind::LBrace)?;
        let mut items = Vec::new();
        while !self.check(TokenKind::RBrace) {
            if self.check(TokenKind::Eof) {
                return Err(self.error("Unexpected end of file inside block"));
            }
            items.push(self.parse_block_item()?);
        }
        self.expect(TokenKind::RBrace)?;
        Ok(items)
    }

    /// One block item. The leading tokens decide between a field, a method
    /// and a statement:
    ///
    /// - modifiers: method if the name is followed by `(`, else field
    /// - `name :`: field with implicit `priv`
    /// - `name ( ... )` then `{` or `->`: method with implicit `priv`
    /// - anything else: statement
    pub(super) fn parse_block_item(&mut self) -> ParseResult<Statement> {
        if self.current.kind.is_modifier() {
            let modifiers = self.parse_modifiers()?;
            if !matches!(self.current.kind, TokenKind::Identifier | TokenKind::String) {
                return Err(self.error(format!("Unexpected token {} in block", self.current.kind)));
            }
            return if self.peek(1)?.kind == TokenKind::LParen {
                Ok(Statement::Function(self.parse_function_def(modifiers)?))
            } else {
                Ok(Statement::Variable(self.parse_variable_def(modifiers)?))
            };
        }

        if self.check(TokenKind::Identifier) {
            match self.peek(1)?.kind {
                TokenKind::Colon => {
                    let modifiers = ModifierList::new().finish();
                    return Ok(Statement::Variable(self.parse_variable_def(modifiers)?));
                }
                TokenKind::LParen => {
                    let after = if self.peek(2)?.kind == TokenKind::RParen {
                        self.peek(3)?.kind
                    } else {
                        self.token_after_parens()?
                    };
                    if matches!(after, TokenKind::LBrace | TokenKind::Arrow) {
                        let modifiers = ModifierList::new().finish();
                        return Ok(Statement::Function(self.parse_function_def(modifiers)?));
                    }
                }
                _ => {}
            }
        }

        self.parse_statement()
    }
}
