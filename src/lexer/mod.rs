//! Lexical analysis module for the Toy front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into tokens for parsing. It handles:
//!
//! - Tokenization using an ordered table of regex rules, longest match wins
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line and column tracking for error reporting
//! - Whitespace and newline handling
//!
//! Tokens are produced on demand; the parser pulls one at a time.

pub mod lexer;
pub mod tokens;
