use std::fmt::Display;

use thiserror::Error;

use crate::{get_line, lexer::tokens::TokenKind, Position};

/// The two failure classes of the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No lexical rule matched, or a literal could not be converted.
    Lexical,
    /// The token stream does not conform to the grammar.
    Syntax,
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } | ErrorImpl::NumberParseError { .. } => {
                ErrorKind::Lexical
            }
            ErrorImpl::UnexpectedToken { .. } | ErrorImpl::UnexpectedTokenDetailed { .. } => {
                ErrorKind::Syntax
            }
        }
    }

    pub fn is_lexical(&self) -> bool {
        self.kind() == ErrorKind::Lexical
    }

    pub fn is_syntax(&self) -> bool {
        self.kind() == ErrorKind::Syntax
    }

    /// The lexeme the error points at: the offending character for lexical
    /// errors, the unexpected token's text for syntax errors.
    pub fn get_token(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { token }
            | ErrorImpl::NumberParseError { token }
            | ErrorImpl::UnexpectedToken { token, .. }
            | ErrorImpl::UnexpectedTokenDetailed { token, .. } => token,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnexpectedToken {
                kind: TokenKind::EOF,
                ..
            } => ErrorTip::Suggestion(String::from(
                "Unexpected end of input, is the program incomplete?",
            )),
            ErrorImpl::UnexpectedToken { token, .. } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message, .. } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
        }
    }

    /// Renders the error against the source it was raised for.
    ///
    /// ```text
    /// Error: UnrecognisedToken
    /// -> main.toy
    ///   |
    /// 1 | let x : int := 5 $ 2;
    ///   | -----------------^
    /// ```
    pub fn report(&self, source: &str) -> String {
        Report {
            error: self,
            source,
        }
        .to_string()
    }
}

/// An error paired with the source it points into.
struct Report<'a> {
    error: &'a Error,
    source: &'a str,
}

impl Display for Report<'_> {
    fn fmt(&self, out: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Report { error, source } = self;

        if let ErrorTip::None = error.get_tip() {
            writeln!(out, "Error: {}", error.get_error_name())?;
        } else {
            writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip())?;
        }
        writeln!(out, "-> {}", error.position.file)?;

        let Some(line_text) = get_line(source, error.position.line) else {
            return Ok(());
        };

        let line_str = error.position.line.to_string();
        let padding = line_str.len() + 2;
        writeln!(out, "{:>padding$}", "|")?;

        let removed_whitespace = line_text.len() - line_text.trim_start_matches([' ', '\t']).len();
        writeln!(out, "{} | {}", line_str, line_text.trim())?;

        let arrows = error
            .position
            .column
            .saturating_sub(1)
            .saturating_sub(removed_whitespace)
            + 1;
        writeln!(out, "{:>padding$} {:->arrows$}", "|", "^")
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("unexpected token: {token:?} ({kind})")]
    UnexpectedToken { token: String, kind: TokenKind },
    #[error("unexpected token ({message:?}): {token:?} ({kind})")]
    UnexpectedTokenDetailed {
        token: String,
        kind: TokenKind,
        message: String,
    },
}
