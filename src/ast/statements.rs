//! Statement nodes

use serde::Serialize;

use super::{ComponentInstantiation, Expression, FunctionDef, SourceLocation, VariableDef};

/// An item of a brace-delimited block.
///
/// Blocks mix statements with inline declarations, so the declaration forms
/// that may appear inside a block are variants here as well.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Statement {
    Expression(ExpressionStatement),
    Return(ReturnStatement),
    If(IfStatement),
    While(WhileStatement),
    Component(ComponentInstantiation),
    Function(FunctionDef),
    Variable(VariableDef),
}

impl Statement {
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            Statement::Expression(s) => s.location.as_ref(),
            Statement::Return(s) => s.location.as_ref(),
            Statement::If(s) => s.location.as_ref(),
            Statement::While(s) => s.location.as_ref(),
            Statement::Component(s) => s.location.as_ref(),
            Statement::Function(s) => s.location.as_ref(),
            Statement::Variable(s) => s.location.as_ref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ExpressionStatement {
    pub expr: Expression,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ReturnStatement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "If")]
pub struct IfStatement {
    pub condition: Expression,
    pub then_block: Vec<Statement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub else_block: Option<Vec<Statement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "While")]
pub struct WhileStatement {
    pub condition: Expression,
    pub body: Vec<Statement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}
