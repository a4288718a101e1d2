#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

pub use ast::ast::Program;
pub use errors::errors::{Error, ErrorKind};
pub use parser::parser::parse;

/// A location in the source text.
///
/// `offset` is a byte offset, `line` and `column` are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(offset: usize, line: usize, column: usize, file: Rc<String>) -> Self {
        Position {
            offset,
            line,
            column,
            file,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Returns the text of the given 1-based line, without its trailing newline.
pub fn get_line(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source.split('\n').nth(line - 1)
}
