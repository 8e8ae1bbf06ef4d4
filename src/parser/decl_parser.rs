//! Declaration parsing: modifiers, types, shards, impls, functions and
//! variables

use crate::ast::*;
use crate::lexer::TokenKind;

use super::{ParseResult, Parser};

impl<'a> Parser<'a> {
    /// One top-level declaration, modifiers included
    pub(super) fn parse_declaration(&mut self) -> ParseResult<Declaration> {
        let first = self.current.clone();
        let mut modifiers = ModifierList::new();
        self.parse_modifier_run(&mut modifiers)?;

        match self.current.kind {
            TokenKind::Type => Ok(Declaration::Type(self.parse_type_def(modifiers.finish())?)),
            TokenKind::Shard => Ok(Declaration::Shard(self.parse_shard_def(modifiers.finish())?)),
            TokenKind::Impl => Ok(Declaration::Impl(self.parse_impl_def(modifiers)?)),
            TokenKind::Identifier => {
                if self.peek(1)?.kind != TokenKind::LParen {
                    return Ok(Declaration::Variable(
                        self.parse_variable_def(modifiers.finish())?,
                    ));
                }
                if self.token_after_parens()? == TokenKind::As {
                    if !modifiers.is_empty() {
                        return Err(self.error_at(
                            &first,
                            "Modifiers are not allowed on a component instantiation",
                        ));
                    }
                    Ok(Declaration::Component(self.parse_component()?))
                } else {
                    Ok(Declaration::Function(
                        self.parse_function_def(modifiers.finish())?,
                    ))
                }
            }
            TokenKind::String => {
                if self.peek(1)?.kind == TokenKind::LParen {
                    Ok(Declaration::Function(
                        self.parse_function_def(modifiers.finish())?,
                    ))
                } else {
                    Ok(Declaration::Variable(
                        self.parse_variable_def(modifiers.finish())?,
                    ))
                }
            }
            kind => Err(self.error(format!("Unexpected token {} at top level", kind))),
        }
    }

    /// Consumes a run of modifier keywords; the result always holds exactly
    /// one visibility, `priv` when none was written.
    pub fn parse_modifiers(&mut self) -> ParseResult<Vec<Modifier>> {
        let mut modifiers = ModifierList::new();
        self.parse_modifier_run(&mut modifiers)?;
        Ok(modifiers.finish())
    }

    pub(super) fn parse_modifier_run(&mut self, modifiers: &mut ModifierList) -> ParseResult<()> {
        while let Some(modifier) = self.current.kind.as_modifier() {
            modifiers.push(modifier);
            self.eat(None)?;
        }
        Ok(())
    }

    /// Type name: identifier, or a string to allow reserved words
    pub fn parse_type(&mut self) -> ParseResult<String> {
        self.expect_name("type identifier or string literal")
    }

    fn parse_type_list(&mut self) -> ParseResult<Vec<String>> {
        let mut types = vec![self.parse_type()?];
        while self.match_token(TokenKind::Comma)? {
            types.push(self.parse_type()?);
        }
        Ok(types)
    }

    fn parse_type_def(&mut self, modifiers: Vec<Modifier>) -> ParseResult<TypeDef> {
        let location = self.location();
        self.expect(TokenKind::Type)?;
        let (name, parents, members) = self.parse_object_rest()?;
        Ok(TypeDef {
            modifiers,
            name,
            parents,
            members,
            location,
        })
    }

    fn parse_shard_def(&mut self, modifiers: Vec<Modifier>) -> ParseResult<ShardDef> {
        let location = self.location();
        self.expect(TokenKind::Shard)?;
        let (name, parents, members) = self.parse_object_rest()?;
        Ok(ShardDef {
            modifiers,
            name,
            parents,
            members,
            location,
        })
    }

    /// `Name [from A, B] ({ members } | ;)` after `type` or `shard`
    #[allow(clippy::type_complexity)]
    fn parse_object_rest(
        &mut self,
    ) -> ParseResult<(String, Option<Vec<String>>, Option<Vec<Member>>)> {
        let name = self.parse_type()?;
        let parents = if self.match_token(TokenKind::From)? {
            Some(self.parse_type_list()?)
        } else {
            None
        };
        let members = if self.check(TokenKind::LBrace) {
            Some(self.parse_member_block()?)
        } else {
            self.expect_semicolon()?;
            None
        };
        Ok((name, parents, members))
    }

    /// `impl [modifiers] [Type [for Trait]] { members }`. Modifiers written
    /// before `impl` arrive in `modifiers` and merge with those after it.
    fn parse_impl_def(&mut self, mut modifiers: ModifierList) -> ParseResult<ImplDef> {
        let location = self.location();
        self.expect(TokenKind::Impl)?;
        self.parse_modifier_run(&mut modifiers)?;

        let (target_type, for_type) = if self.check(TokenKind::LBrace) {
            (None, None)
        } else {
            let target = self.parse_type()?;
            let trait_name = if self.match_token(TokenKind::For)? {
                Some(self.parse_type()?)
            } else {
                None
            };
            (Some(target), trait_name)
        };

        let members = self.parse_member_block()?;
        Ok(ImplDef {
            modifiers: modifiers.finish(),
            target_type,
            for_type,
            members,
            location,
        })
    }

    /// A block whose items must all be fields or methods. A bare `name;` is
    /// a field. Bare string statements are documentation and are dropped.
    fn parse_member_block(&mut self) -> ParseResult<Vec<Member>> {
        self.expect(TokenKind::LBrace)?;
        let mut members = Vec::new();
        while !self.check(TokenKind::RBrace) {
            if self.check(TokenKind::Eof) {
                return Err(self.error("Unexpected end of file inside block"));
            }
            let start = self.current.clone();
            if self.check(TokenKind::Identifier) && self.peek(1)?.kind == TokenKind::Semicolon {
                let modifiers = ModifierList::new().finish();
                members.push(Member::Variable(self.parse_variable_def(modifiers)?));
                continue;
            }
            match self.parse_block_item()? {
                Statement::Function(function) => members.push(Member::Function(function)),
                Statement::Variable(variable) => members.push(Member::Variable(variable)),
                Statement::Expression(ExpressionStatement {
                    expr:
                        Expression::Literal(Literal {
                            value: LiteralValue::String(_),
                            ..
                        }),
                    ..
                }) => {}
                _ => {
                    return Err(self.error_at(
                        &start,
                        "Only fields and methods are allowed in a type body",
                    ))
                }
            }
        }
        self.expect(TokenKind::RBrace)?;
        Ok(members)
    }

    /// `name(params) [-> Type] ({ body } | ;)`
    pub(super) fn parse_function_def(&mut self, modifiers: Vec<Modifier>) -> ParseResult<FunctionDef> {
        let location = self.location();
        let name = self.expect_name("function name or string literal")?;

        self.expect(TokenKind::LParen)?;
        let mut params = Vec::new();
        if !self.check(TokenKind::RParen) {
            loop {
                params.push(self.parse_parameter()?);
                if !self.match_token(TokenKind::Comma)? {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen)?;

        let return_type = if self.match_token(TokenKind::Arrow)? {
            Some(self.parse_type()?)
        } else {
            None
        };

        let body = if self.check(TokenKind::LBrace) {
            Some(self.parse_block()?)
        } else {
            self.expect_semicolon()?;
            None
        };

        Ok(FunctionDef {
            modifiers,
            name,
            params,
            return_type,
            body,
            location,
        })
    }

    fn parse_parameter(&mut self) -> ParseResult<Parameter> {
        let location = self.location();
        let modifiers = self.parse_modifiers()?;

        if self.check(TokenKind::String) {
            return Err(self.error("String literals cannot be used as parameter names"));
        }
        let name = self.expect_identifier("parameter name")?;

        let param_type = if self.match_token(TokenKind::Colon)? {
            Some(self.parse_type()?)
        } else {
            None
        };
        let default_value = if self.match_token(TokenKind::Assign)? {
            Some(self.parse_expression(0)?)
        } else {
            None
        };

        Ok(Parameter {
            modifiers,
            name,
            param_type,
            default_value,
            location,
        })
    }

    /// `name [: Type] [= value];`
    pub(super) fn parse_variable_def(&mut self, modifiers: Vec<Modifier>) -> ParseResult<VariableDef> {
        let location = self.location();
        let name = self.expect_name("identifier or string literal")?;

        let type_name = if self.match_token(TokenKind::Colon)? {
            Some(self.parse_type()?)
        } else {
            None
        };
        let value = if self.match_token(TokenKind::Assign)? {
            Some(self.parse_expression(0)?)
        } else {
            None
        };
        self.expect_semicolon()?;

        Ok(VariableDef {
            modifiers,
            name,
            type_name,
            value,
            location,
        })
    }

    /// `Name(args) as instance;`
    fn parse_component(&mut self) -> ParseResult<ComponentInstantiation> {
        let location = self.location();
        let component_type = self.expect_identifier("component name")?;
        let args = self.parse_arguments()?;
        self.expect(TokenKind::As)?;
        let instance_name = self.expect_identifier("instance name after 'as'")?;
        self.expect_semicolon()?;
        Ok(ComponentInstantiation {
            component_type,
            instance_name: Some(instance_name),
            args,
            location,
        })
    }
}
