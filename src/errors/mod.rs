//! Error types and error handling for the front end.
//!
//! This module defines the single error type returned by the lexer and the
//! parser. It includes:
//!
//! - Error structures with source position information
//! - The lexical / syntax error distinction
//! - Error tips and a single-line diagnostic renderer

pub mod errors;
