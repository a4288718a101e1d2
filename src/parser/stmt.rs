use tracing::debug;

use crate::{
    ast::{
        ast::{Program, Stmt},
        expressions::Identifier,
        statements::{LetDeclaration, ReturnStatement},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{parser::Parser, types::parse_type};

/// Parses one or more statements, stopping in front of `terminator`.
pub fn parse_program(parser: &mut Parser, terminator: TokenKind) -> Result<Program, Error> {
    let mut body = vec![parse_stmt(parser)?];

    while parser.current_token_kind() != terminator {
        body.push(parse_stmt(parser)?);
    }

    Ok(Program::new(body))
}

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let line = parser.current_token().line();
    let Some(stmt_fn) = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied()
    else {
        return Err(parser.unexpected_detailed("expected `let` or `return`"));
    };

    let stmt = stmt_fn(parser)?;
    debug!(line, "parsed statement");

    Ok(stmt)
}

pub fn parse_let_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Let)?;

    let variable_name = parser
        .expect_error(
            TokenKind::Identifier,
            Some("expected identifier during variable declaration"),
        )?
        .lexeme;

    parser.expect_error(TokenKind::Colon, Some("expected `:` before the declared type"))?;
    let type_decl = parse_type(parser)?;

    let init = if parser.current_token_kind() == TokenKind::Assign {
        parser.advance()?;
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Let(LetDeclaration::new(
        Identifier::new(variable_name),
        type_decl,
        init,
    )))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Return)?;

    let value = parse_expr(parser, BindingPower::Default)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Return(ReturnStatement::new(value)))
}
