//! Type declaration parsing.
//!
//! This module handles parsing of type annotations. It supports:
//!
//! - Named types (identifiers)
//! - Closure types, `(T1, T2 -> R)`
//! - Wrapped types, `(T,)` and `(T1, T2)`
//!
//! An arrow before the closing parenthesis makes a closure type, otherwise
//! the group is a wrapped type. A single-element wrapped type needs its
//! trailing comma; `(T)` is not a type.

use std::collections::HashMap;

use crate::{
    ast::{
        ast::TypeDecl,
        expressions::Identifier,
        types::{ClosureType, TypeList},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Type alias for type null denotation handler functions.
pub type TypeNUDHandler = fn(&mut Parser) -> Result<TypeDecl, Error>;

/// Type alias for type NUD lookup table.
pub type TypeNUDLookup = HashMap<TokenKind, TypeNUDHandler>;

/// Initializes the type parsing lookup table.
pub fn create_token_type_lookups(parser: &mut Parser) {
    parser.type_nud(TokenKind::Identifier, parse_symbol_type);
    parser.type_nud(TokenKind::OpenParen, parse_parenthesized_type);
}

pub fn parse_symbol_type(parser: &mut Parser) -> Result<TypeDecl, Error> {
    let token = parser.expect(TokenKind::Identifier)?;
    Ok(TypeDecl::Named(Identifier::new(token.lexeme)))
}

pub fn parse_parenthesized_type(parser: &mut Parser) -> Result<TypeDecl, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let first = parse_type(parser)?;

    parse_type_group_rest(parser, first, true)
}

/// Finishes a parenthesized type group after its first element.
///
/// With `allow_wrapped` unset only a closure type is accepted.
pub fn parse_type_group_rest(
    parser: &mut Parser,
    first: TypeDecl,
    allow_wrapped: bool,
) -> Result<TypeDecl, Error> {
    let mut items = TypeList::new(vec![first]);

    loop {
        match parser.current_token_kind() {
            TokenKind::Arrow => {
                parser.advance()?;
                let out_type = parse_type(parser)?;
                parser.expect_error(
                    TokenKind::CloseParen,
                    Some("expected `)` after the closure output type"),
                )?;

                return Ok(TypeDecl::Closure(ClosureType::new(items, out_type)));
            }
            TokenKind::Comma => {
                parser.advance()?;

                if allow_wrapped
                    && items.len() == 1
                    && parser.current_token_kind() == TokenKind::CloseParen
                {
                    parser.advance()?;
                    return Ok(TypeDecl::Wrapped(items));
                }

                items.push(parse_type(parser)?);
            }
            TokenKind::CloseParen if allow_wrapped && items.len() > 1 => {
                parser.advance()?;
                return Ok(TypeDecl::Wrapped(items));
            }
            _ => {
                return Err(parser.unexpected_detailed("expected `,` or `->` in type list"));
            }
        }
    }
}

pub fn parse_type(parser: &mut Parser) -> Result<TypeDecl, Error> {
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = parser.get_type_nud_lookup().get(&token_kind).copied() else {
        return Err(parser.unexpected_detailed("expected a type"));
    };

    nud_fn(parser)
}
