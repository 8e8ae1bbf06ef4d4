//! Declaration nodes

use serde::Serialize;

use super::{Expression, Modifier, SourceLocation, Statement};

/// Top-level declaration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Declaration {
    Type(TypeDef),
    Shard(ShardDef),
    Impl(ImplDef),
    Function(FunctionDef),
    Variable(VariableDef),
    Component(ComponentInstantiation),
}

impl Declaration {
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            Declaration::Type(d) => d.location.as_ref(),
            Declaration::Shard(d) => d.location.as_ref(),
            Declaration::Impl(d) => d.location.as_ref(),
            Declaration::Function(d) => d.location.as_ref(),
            Declaration::Variable(d) => d.location.as_ref(),
            Declaration::Component(d) => d.location.as_ref(),
        }
    }
}

/// Member of a type, shard or impl body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Member {
    Function(FunctionDef),
    Variable(VariableDef),
}

impl Member {
    pub fn name(&self) -> &str {
        match self {
            Member::Function(f) => &f.name,
            Member::Variable(v) => &v.name,
        }
    }
}

/// `type Name [from A, B] { ... }` or `type Name;`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct TypeDef {
    pub modifiers: Vec<Modifier>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parents: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<Member>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

/// Same grammar as [`TypeDef`], introduced by `shard`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ShardDef {
    pub modifiers: Vec<Modifier>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parents: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<Member>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

/// `impl [Type [for Trait]] { ... }`; `target_type` is `None` for the base impl
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ImplDef {
    pub modifiers: Vec<Modifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub for_type: Option<String>,
    pub members: Vec<Member>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

/// Function or method. `body` is `None` for a bare prototype.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct FunctionDef {
    pub modifiers: Vec<Modifier>,
    pub name: String,
    pub params: Vec<Parameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Vec<Statement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct VariableDef {
    pub modifiers: Vec<Modifier>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Parameter {
    pub modifiers: Vec<Modifier>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

/// `Name(args) as instance;`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ComponentInstantiation {
    pub component_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_name: Option<String>,
    pub args: Vec<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}
