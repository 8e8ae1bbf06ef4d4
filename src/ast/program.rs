//! Program root node

use serde::Serialize;

use super::{Declaration, SourceLocation};

/// Root of a parsed source file
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Program {
    pub declarations: Vec<Declaration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

impl Program {
    pub fn new(declarations: Vec<Declaration>) -> Self {
        Self {
            declarations,
            location: None,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
