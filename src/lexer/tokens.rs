use std::fmt::Display;

use crate::Span;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Int,
    Real,
    String,
    Identifier,

    // Reserved
    Let,
    Return,
    True,
    False,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assign, // :=
    Arrow,  // ->
    Colon,
    Semicolon,
    Comma,
    Dot,
    DotDot,

    Plus,
    Minus,
    Star,
    StarStar,
    Slash,
    Percent,

    Equals,     // ==
    NotEquals,  // !=
    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Not,
    And,
    Or,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Symbolic tag attached to operator tokens.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operator {
    Plus,
    Minus,
    Times,
    Divide,
    Mod,
    Exp,
    Eq,
    NotEq,
    Less,
    LessEq,
    Greater,
    GreaterEq,
    Not,
    And,
    Or,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Times => "*",
            Operator::Divide => "/",
            Operator::Mod => "%",
            Operator::Exp => "**",
            Operator::Eq => "==",
            Operator::NotEq => "!=",
            Operator::Less => "<",
            Operator::LessEq => "<=",
            Operator::Greater => ">",
            Operator::GreaterEq => ">=",
            Operator::Not => "not",
            Operator::And => "and",
            Operator::Or => "or",
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The semantic payload of a token. Exactly one variant per token.
#[derive(Debug, PartialEq, Clone)]
pub enum TokenValue {
    None,
    Int(i64),
    Real(f64),
    Bool(bool),
    /// Raw string literal text, quotes included, escapes untouched.
    Str(String),
    Ident(String),
    Op(Operator),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub value: TokenValue,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} `{}` at line {}", self.kind, self.lexeme, self.span.start.line)
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn line(&self) -> usize {
        self.span.start.line
    }

    pub fn operator(&self) -> Option<Operator> {
        match self.value {
            TokenValue::Op(op) => Some(op),
            _ => None,
        }
    }

    pub fn debug(&self) -> String {
        if self.is_one_of_many(&[
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::Int,
            TokenKind::Real,
            TokenKind::True,
            TokenKind::False,
        ]) {
            format!("{} ({})", self.kind, self.lexeme)
        } else {
            format!("{} ()", self.kind)
        }
    }
}
