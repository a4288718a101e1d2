use std::{fmt::Display, slice::Iter};

use super::{
    expressions::{
        BinaryOperatorNode, BoolLiteral, ClosureNode, Identifier, IntLiteral, RealLiteral,
        StringLiteral, UnaryOperatorNode,
    },
    statements::{LetDeclaration, ReturnStatement},
    types::{ClosureType, TypeList},
};

/// Program
///
/// An ordered, non-empty sequence of statements. Both the whole source and
/// every closure body are programs.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Vec<Stmt>,
}

impl Program {
    pub fn new(body: Vec<Stmt>) -> Self {
        Program { body }
    }

    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, stmt) in self.body.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

/// Statements
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Let(LetDeclaration),
    Return(ReturnStatement),
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Let(stmt) => write!(f, "{}", stmt),
            Stmt::Return(stmt) => write!(f, "{}", stmt),
        }
    }
}

impl From<LetDeclaration> for Stmt {
    fn from(stmt: LetDeclaration) -> Self {
        Stmt::Let(stmt)
    }
}

impl From<ReturnStatement> for Stmt {
    fn from(stmt: ReturnStatement) -> Self {
        Stmt::Return(stmt)
    }
}

/// Expressions
///
/// Literal values, operator applications and closures. Parenthesized
/// expressions leave no node of their own.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Int(IntLiteral),
    Real(RealLiteral),
    Bool(BoolLiteral),
    Str(StringLiteral),
    Ident(Identifier),
    Binary(BinaryOperatorNode),
    Unary(UnaryOperatorNode),
    Closure(ClosureNode),
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Int(expr) => write!(f, "{}", expr),
            Expr::Real(expr) => write!(f, "{}", expr),
            Expr::Bool(expr) => write!(f, "{}", expr),
            Expr::Str(expr) => write!(f, "{}", expr),
            Expr::Ident(expr) => write!(f, "{}", expr),
            Expr::Binary(expr) => write!(f, "{}", expr),
            Expr::Unary(expr) => write!(f, "{}", expr),
            Expr::Closure(expr) => write!(f, "{}", expr),
        }
    }
}

/// Type declarations
///
/// A bare type name, a closure signature, or a wrapped (tuple) list of one
/// or more component types.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDecl {
    Named(Identifier),
    Closure(ClosureType),
    Wrapped(TypeList),
}

impl Display for TypeDecl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeDecl::Named(name) => write!(f, "{}", name),
            TypeDecl::Closure(closure) => write!(f, "{}", closure),
            TypeDecl::Wrapped(list) if list.len() == 1 => write!(f, "({},)", list),
            TypeDecl::Wrapped(list) => write!(f, "({})", list),
        }
    }
}
