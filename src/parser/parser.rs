//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser uses a Pratt parser approach with NUD/LED handlers for
//! expression parsing and specialized functions for statement and type
//! parsing.
//!
//! Tokens are pulled from the lexer one at a time; the parser only ever
//! holds the current token.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//! - Type parsing handlers

use std::{collections::HashMap, mem};

use tracing::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler,
        NUDLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_program,
    types::{create_token_type_lookups, TypeNUDHandler, TypeNUDLookup},
};

/// The main parser structure that maintains parsing state.
///
/// This struct owns the lexer it pulls tokens from and the lookup tables
/// for parsing statements, expressions, and types.
pub struct Parser {
    /// The token source
    lexer: Lexer,
    /// The single token of lookahead
    current: Token,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Lookup table for type null denotation handlers
    type_nud_lookup: TypeNUDLookup,
}

impl Parser {
    /// Creates a new Parser over the given lexer.
    ///
    /// Pulls the first token and registers every statement, expression and
    /// type handler.
    ///
    /// # Errors
    ///
    /// Returns a lexical error if the first token cannot be scanned.
    pub fn new(mut lexer: Lexer) -> Result<Self, Error> {
        let current = lexer.next_token()?;

        let mut parser = Parser {
            lexer,
            current,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            type_nud_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        create_token_type_lookups(&mut parser);

        Ok(parser)
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the binding power of the current token, `Default` if it is
    /// not an infix operator.
    pub fn current_binding_power(&self) -> BindingPower {
        *self
            .binding_power_lookup
            .get(&self.current.kind)
            .unwrap_or(&BindingPower::Default)
    }

    /// Pulls the next token from the lexer and returns the previous one.
    ///
    /// # Errors
    ///
    /// Returns a lexical error if the next token cannot be scanned.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = self.lexer.next_token()?;
        Ok(mem::replace(&mut self.current, next))
    }

    /// Expects a token of the specified kind, with an optional message
    /// describing what was expected.
    ///
    /// Returns the consumed token if the current token matches, otherwise a
    /// syntax error pointing at the current token.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        message: Option<&str>,
    ) -> Result<Token, Error> {
        if self.current.kind != expected_kind {
            return match message {
                Some(message) => Err(self.unexpected_detailed(message)),
                None => Err(self.unexpected()),
            };
        }

        self.advance()
    }

    /// Expects a token of the specified kind with the default error.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current.kind != TokenKind::EOF
    }

    /// A syntax error at the current token.
    pub fn unexpected(&self) -> Error {
        unexpected_token(&self.current)
    }

    /// A syntax error at the current token, with a note on what was expected.
    pub fn unexpected_detailed(&self, message: &str) -> Error {
        Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: self.current.lexeme.clone(),
                kind: self.current.kind,
                message: String::from(message),
            },
            self.current.span.start.clone(),
        )
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the type NUD lookup table.
    pub fn get_type_nud_lookup(&self) -> &TypeNUDLookup {
        &self.type_nud_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// Does not touch the binding power table, so a token may be both a
    /// prefix and an infix operator (`-`).
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Registers a type null denotation handler.
    pub fn type_nud(&mut self, kind: TokenKind, nud_fn: TypeNUDHandler) {
        self.type_nud_lookup.insert(kind, nud_fn);
    }
}

/// A syntax error at the given token.
pub fn unexpected_token(token: &Token) -> Error {
    Error::new(
        ErrorImpl::UnexpectedToken {
            token: token.lexeme.clone(),
            kind: token.kind,
        },
        token.span.start.clone(),
    )
}

/// Parses Toy source into a Program.
///
/// This is the main entry point. Every call builds a fresh lexer and
/// parser, so no state is shared between parses.
///
/// # Arguments
///
/// * `source` - The full program text
/// * `file` - Optional label used in error positions, `"shell"` if omitted
///
/// # Errors
///
/// Returns the first lexical or syntax error encountered.
pub fn parse(source: String, file: Option<String>) -> Result<Program, Error> {
    let mut parser = Parser::new(Lexer::new(source, file))?;
    debug!(file = %parser.lexer.file(), "parsing program");

    let program = parse_program(&mut parser, TokenKind::EOF)?;
    parser.expect(TokenKind::EOF)?;

    debug!(
        statements = program.len(),
        lines = parser.lexer.line(),
        "parsed program"
    );
    Ok(program)
}
