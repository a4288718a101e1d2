use std::fmt::Display;

use super::{
    ast::{Expr, TypeDecl},
    expressions::Identifier,
};

/// `let <id> : <type> [:= <init>];`
#[derive(Debug, Clone, PartialEq)]
pub struct LetDeclaration {
    pub id: Identifier,
    pub type_decl: TypeDecl,
    pub init: Option<Expr>,
}

impl LetDeclaration {
    pub fn new(id: Identifier, type_decl: TypeDecl, init: Option<Expr>) -> Self {
        LetDeclaration {
            id,
            type_decl,
            init,
        }
    }
}

impl Display for LetDeclaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "let {} : {}", self.id, self.type_decl)?;
        if let Some(init) = &self.init {
            write!(f, " := {}", init)?;
        }
        write!(f, ";")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub value: Expr,
}

impl ReturnStatement {
    pub fn new(value: Expr) -> Self {
        ReturnStatement { value }
    }
}

impl Display for ReturnStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "return {};", self.value)
    }
}
