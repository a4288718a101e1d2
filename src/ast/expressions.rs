use std::fmt::Display;

use crate::lexer::tokens::Operator;

use super::{ast::Expr, ast::Program, types::ClosureType};

// LITERALS

/// Integer literal, with the source text it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct IntLiteral {
    pub raw: String,
    pub value: i64,
}

impl IntLiteral {
    pub fn new(raw: impl Into<String>, value: i64) -> Self {
        IntLiteral {
            raw: raw.into(),
            value,
        }
    }
}

impl Display for IntLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Real literal, with the source text it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct RealLiteral {
    pub raw: String,
    pub value: f64,
}

impl RealLiteral {
    pub fn new(raw: impl Into<String>, value: f64) -> Self {
        RealLiteral {
            raw: raw.into(),
            value,
        }
    }
}

impl Display for RealLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoolLiteral {
    pub raw: String,
    pub value: bool,
}

impl BoolLiteral {
    pub fn new(raw: impl Into<String>, value: bool) -> Self {
        BoolLiteral {
            raw: raw.into(),
            value,
        }
    }
}

impl Display for BoolLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// String literal. `raw` keeps the delimiting quotes and any escapes as
/// written.
#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub raw: String,
}

impl StringLiteral {
    pub fn new(raw: impl Into<String>) -> Self {
        StringLiteral { raw: raw.into() }
    }
}

impl Display for StringLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier { name: name.into() }
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

// OPERATORS

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperatorToken {
    pub op: Operator,
}

impl OperatorToken {
    pub fn new(op: Operator) -> Self {
        OperatorToken { op }
    }

    pub fn symbol(&self) -> &'static str {
        self.op.symbol()
    }
}

impl Display for OperatorToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.op)
    }
}

/// Binary Operator
///
/// Printed fully parenthesized so that re-parsing the output yields the
/// same grouping regardless of precedence.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOperatorNode {
    pub op: OperatorToken,
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
}

impl BinaryOperatorNode {
    pub fn new(op: OperatorToken, lhs: Expr, rhs: Expr) -> Self {
        BinaryOperatorNode {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }
}

impl Display for BinaryOperatorNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lhs = self.lhs.to_string();
        let rhs = self.rhs.to_string();

        // A string literal extends to the last quote on its line, so two
        // strings must never share one.
        if ends_with_quoted_line(&lhs) && rhs.contains('"') {
            write!(f, "({}\n{} {})", lhs, self.op, rhs)
        } else {
            write!(f, "({} {} {})", lhs, self.op, rhs)
        }
    }
}

fn ends_with_quoted_line(text: &str) -> bool {
    text.rsplit('\n').next().is_some_and(|line| line.contains('"'))
}

/// Unary Operator (`not` or prefix `-`).
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOperatorNode {
    pub op: OperatorToken,
    pub operand: Box<Expr>,
}

impl UnaryOperatorNode {
    pub fn new(op: OperatorToken, operand: Expr) -> Self {
        UnaryOperatorNode {
            op,
            operand: Box::new(operand),
        }
    }
}

impl Display for UnaryOperatorNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The space keeps `- 5` from re-lexing as the literal `-5`.
        write!(f, "({} {})", self.op, self.operand)
    }
}

// CLOSURES

#[derive(Debug, Clone, PartialEq)]
pub struct ClosureNode {
    pub closure_type: ClosureType,
    pub body: Program,
}

impl ClosureNode {
    pub fn new(closure_type: ClosureType, body: Program) -> Self {
        ClosureNode { closure_type, body }
    }
}

impl Display for ClosureNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} {{", self.closure_type)?;
        for stmt in self.body.iter() {
            writeln!(f, "{}", stmt)?;
        }
        write!(f, "}}")
    }
}
