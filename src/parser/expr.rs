use crate::{
    ast::{
        ast::{Expr, TypeDecl},
        expressions::{
            BinaryOperatorNode, BoolLiteral, ClosureNode, Identifier, IntLiteral, OperatorToken,
            RealLiteral, StringLiteral, UnaryOperatorNode,
        },
        types::ClosureType,
    },
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind, TokenValue},
};

use super::{
    lookups::BindingPower,
    parser::{unexpected_token, Parser},
    stmt::parse_program,
    types::parse_type_group_rest,
};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(parser.unexpected_detailed("expected an expression"));
    };

    let left = nud_fn(parser)?;

    parse_expr_from(parser, left, bp)
}

/// Continues a Pratt loop with an already parsed left operand.
pub fn parse_expr_from(parser: &mut Parser, mut left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    // While the current token binds tighter than bp, keep extending lhs
    while parser.current_binding_power() > bp {
        let token_kind = parser.current_token_kind();
        let Some(led_fn) = parser.get_led_lookup().get(&token_kind).copied() else {
            return Err(parser.unexpected());
        };

        let token_bp = parser.current_binding_power();
        left = led_fn(parser, left, token_bp)?;
    }

    Ok(left)
}

fn operator_of(token: &Token) -> Result<OperatorToken, Error> {
    match token.operator() {
        Some(op) => Ok(OperatorToken::new(op)),
        None => Err(unexpected_token(token)),
    }
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance()?;

    match token.value {
        TokenValue::Int(value) => Ok(Expr::Int(IntLiteral::new(token.lexeme, value))),
        TokenValue::Real(value) => Ok(Expr::Real(RealLiteral::new(token.lexeme, value))),
        TokenValue::Bool(value) => Ok(Expr::Bool(BoolLiteral::new(token.lexeme, value))),
        TokenValue::Str(raw) => Ok(Expr::Str(StringLiteral::new(raw))),
        TokenValue::Ident(name) => Ok(Expr::Ident(Identifier::new(name))),
        TokenValue::Op(_) | TokenValue::None => Err(unexpected_token(&token)),
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance()?;
    let op = operator_of(&operator_token)?;

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryOperatorNode::new(op, left, right)))
}

pub fn parse_right_assoc_binary_expr(
    parser: &mut Parser,
    left: Expr,
    bp: BindingPower,
) -> Result<Expr, Error> {
    let operator_token = parser.advance()?;
    let op = operator_of(&operator_token)?;

    let right = parse_expr(parser, bp.lower())?;

    Ok(Expr::Binary(BinaryOperatorNode::new(op, left, right)))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance()?;
    let op = operator_of(&operator_token)?;

    let operand = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Unary(UnaryOperatorNode::new(op, operand)))
}

/// What a parenthesized group turned out to be.
enum Group {
    Type(TypeDecl),
    Expr(Expr),
}

/// `(` in expression position: a parenthesized expression, or the
/// signature of a closure expression.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parse_group(parser, false)? {
        Group::Expr(expr) => Ok(expr),
        Group::Type(TypeDecl::Closure(closure_type)) => parse_closure_body(parser, closure_type),
        Group::Type(_) => Err(parser.unexpected()),
    }
}

// Reads a group whose meaning is only known once a `,`, `->`, operator or
// `{` shows up. `allow_wrapped` is false at the outermost expression level,
// where a wrapped type can never be valid.
fn parse_group(parser: &mut Parser, allow_wrapped: bool) -> Result<Group, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let first = match parser.current_token_kind() {
        TokenKind::Identifier => {
            let token = parser.advance()?;
            let name = Identifier::new(token.lexeme);

            match parser.current_token_kind() {
                TokenKind::Comma | TokenKind::Arrow => Group::Type(TypeDecl::Named(name)),
                _ => Group::Expr(parse_expr_from(parser, Expr::Ident(name), BindingPower::Default)?),
            }
        }
        TokenKind::OpenParen => match parse_group(parser, true)? {
            Group::Type(TypeDecl::Closure(closure_type))
                if parser.current_token_kind() == TokenKind::OpenCurly =>
            {
                let closure = parse_closure_body(parser, closure_type)?;
                Group::Expr(parse_expr_from(parser, closure, BindingPower::Default)?)
            }
            Group::Type(type_decl) => Group::Type(type_decl),
            Group::Expr(expr) => Group::Expr(parse_expr_from(parser, expr, BindingPower::Default)?),
        },
        _ => Group::Expr(parse_expr(parser, BindingPower::Default)?),
    };

    match first {
        Group::Expr(expr) => {
            parser.expect(TokenKind::CloseParen)?;
            Ok(Group::Expr(expr))
        }
        Group::Type(type_decl) => Ok(Group::Type(parse_type_group_rest(
            parser,
            type_decl,
            allow_wrapped,
        )?)),
    }
}

/// `{ program }` following a closure signature.
pub fn parse_closure_body(parser: &mut Parser, closure_type: ClosureType) -> Result<Expr, Error> {
    parser.expect_error(TokenKind::OpenCurly, Some("expected `{` to open the closure body"))?;
    let body = parse_program(parser, TokenKind::CloseCurly)?;
    parser.expect(TokenKind::CloseCurly)?;

    Ok(Expr::Closure(ClosureNode::new(closure_type, body)))
}
