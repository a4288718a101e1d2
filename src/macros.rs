//! Utility macros for the front end.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler for punctuation and keywords
//! - `MK_OPERATOR_HANDLER!` - Creates a lexer handler for operator tokens
//!
//! These macros reduce boilerplate in the lexer rule table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The raw matched text
/// * `$value` - The TokenValue payload
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42".to_string(), TokenValue::Int(42), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a lexer handler for tokens that carry no payload.
///
/// The generated handler emits a token of the given kind for the matched
/// text and advances the lexer past it.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^;").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer, matched: &str| -> Result<Option<Token>, Error> {
            let token = MK_TOKEN!(
                $kind,
                String::from(matched),
                TokenValue::None,
                lexer.span_for(matched.len())
            );
            lexer.advance_n(matched.len());
            Ok(Some(token))
        }
    };
}

/// Creates a lexer handler for operator tokens.
///
/// Like `MK_DEFAULT_HANDLER!`, but the emitted token carries the operator
/// tag as its value.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\*\\*").unwrap(),
///     handler: MK_OPERATOR_HANDLER!(TokenKind::StarStar, Operator::Exp),
/// }
/// ```
#[macro_export]
macro_rules! MK_OPERATOR_HANDLER {
    ($kind:expr, $op:expr) => {
        |lexer: &mut Lexer, matched: &str| -> Result<Option<Token>, Error> {
            let token = MK_TOKEN!(
                $kind,
                String::from(matched),
                TokenValue::Op($op),
                lexer.span_for(matched.len())
            );
            lexer.advance_n(matched.len());
            Ok(Some(token))
        }
    };
}
