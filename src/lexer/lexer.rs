use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_OPERATOR_HANDLER, MK_TOKEN,
};

use super::tokens::{Operator, Token, TokenKind, TokenValue};

pub type RegexHandler = fn(&mut Lexer, &str) -> Result<Option<Token>, Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    /// The lexical rules, in declaration order.
    ///
    /// At every position the longest match wins; on equal length the rule
    /// declared first wins. Keywords therefore sit above the identifier rule.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^let").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Let) },
        RegexPattern { regex: Regex::new("^return").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Return) },
        RegexPattern { regex: Regex::new("^true").unwrap(), handler: bool_handler },
        RegexPattern { regex: Regex::new("^false").unwrap(), handler: bool_handler },
        RegexPattern { regex: Regex::new("^not").unwrap(), handler: MK_OPERATOR_HANDLER!(TokenKind::Not, Operator::Not) },
        RegexPattern { regex: Regex::new("^and").unwrap(), handler: MK_OPERATOR_HANDLER!(TokenKind::And, Operator::And) },
        RegexPattern { regex: Regex::new("^or").unwrap(), handler: MK_OPERATOR_HANDLER!(TokenKind::Or, Operator::Or) },
        RegexPattern { regex: Regex::new("^-?[0-9]*\\.[0-9]+").unwrap(), handler: real_handler },
        RegexPattern { regex: Regex::new("^-?[0-9]+").unwrap(), handler: int_handler },
        RegexPattern { regex: Regex::new("^\".*\"").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new("^:=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assign) },
        RegexPattern { regex: Regex::new("^->").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Arrow) },
        RegexPattern { regex: Regex::new("^\\*\\*").unwrap(), handler: MK_OPERATOR_HANDLER!(TokenKind::StarStar, Operator::Exp) },
        RegexPattern { regex: Regex::new("^\\.\\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::DotDot) },
        RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_OPERATOR_HANDLER!(TokenKind::Equals, Operator::Eq) },
        RegexPattern { regex: Regex::new("^!=").unwrap(), handler: MK_OPERATOR_HANDLER!(TokenKind::NotEquals, Operator::NotEq) },
        RegexPattern { regex: Regex::new("^<=").unwrap(), handler: MK_OPERATOR_HANDLER!(TokenKind::LessEquals, Operator::LessEq) },
        RegexPattern { regex: Regex::new("^>=").unwrap(), handler: MK_OPERATOR_HANDLER!(TokenKind::GreaterEquals, Operator::GreaterEq) },
        RegexPattern { regex: Regex::new("^:").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon) },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_OPERATOR_HANDLER!(TokenKind::Minus, Operator::Minus) },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_OPERATOR_HANDLER!(TokenKind::Star, Operator::Times) },
        RegexPattern { regex: Regex::new("^\\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot) },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_OPERATOR_HANDLER!(TokenKind::Less, Operator::Less) },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_OPERATOR_HANDLER!(TokenKind::Greater, Operator::Greater) },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_OPERATOR_HANDLER!(TokenKind::Plus, Operator::Plus) },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_OPERATOR_HANDLER!(TokenKind::Slash, Operator::Divide) },
        RegexPattern { regex: Regex::new("^%").unwrap(), handler: MK_OPERATOR_HANDLER!(TokenKind::Percent, Operator::Mod) },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon) },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma) },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen) },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen) },
        RegexPattern { regex: Regex::new("^\\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBracket) },
        RegexPattern { regex: Regex::new("^\\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBracket) },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly) },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly) },
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: identifier_handler },
        RegexPattern { regex: Regex::new("^[ \t]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^\n+").unwrap(), handler: newline_handler },
    ];
}

/// A pull-based tokenizer over an in-memory source string.
///
/// Each call to [`Lexer::next_token`] scans exactly one token. Once the
/// input is exhausted an `EOF` token is returned on every call.
pub struct Lexer {
    source: String,
    pos: usize,
    line: usize,
    line_start: usize,
    file: Rc<String>,
    finished: bool,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            line: 1,
            line_start: 0,
            file: file_name,
            finished: false,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    pub fn current_position(&self) -> Position {
        self.position_at(self.pos)
    }

    fn position_at(&self, offset: usize) -> Position {
        Position::new(
            offset,
            self.line,
            offset - self.line_start + 1,
            Rc::clone(&self.file),
        )
    }

    /// Span of a `len` byte token starting at the cursor. Tokens never
    /// cross a newline.
    pub fn span_for(&self, len: usize) -> Span {
        Span {
            start: self.position_at(self.pos),
            end: self.position_at(self.pos + len),
        }
    }

    /// Picks the rule with the longest match at the cursor. Earlier rules
    /// win ties.
    fn longest_match(&self) -> Option<(&'static RegexPattern, usize)> {
        let patterns: &'static Vec<RegexPattern> = &PATTERNS;
        let remaining = self.remainder();
        let mut best: Option<(&'static RegexPattern, usize)> = None;

        for pattern in patterns.iter() {
            if let Some(found) = pattern.regex.find(remaining) {
                let len = found.end();
                if len > best.map_or(0, |(_, best_len)| best_len) {
                    best = Some((pattern, len));
                }
            }
        }

        best
    }

    /// Scans the next token, skipping whitespace and newlines.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        while !self.at_eof() {
            let Some((pattern, len)) = self.longest_match() else {
                let token = self.at().map(String::from).unwrap_or_default();
                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken { token },
                    self.current_position(),
                ));
            };

            let matched = self.source[self.pos..self.pos + len].to_string();
            if let Some(token) = (pattern.handler)(self, &matched)? {
                trace!(token = %token.debug(), line = token.line(), "lexed token");
                return Ok(token);
            }
        }

        Ok(MK_TOKEN!(
            TokenKind::EOF,
            String::from("EOF"),
            TokenValue::None,
            self.span_for(0)
        ))
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, Error>;

    /// Yields tokens up to and including `EOF`, or up to the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();
        match &result {
            Ok(token) if token.kind == TokenKind::EOF => self.finished = true,
            Err(_) => self.finished = true,
            _ => {}
        }

        Some(result)
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    lexer.advance_n(matched.len());
    Ok(None)
}

fn newline_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    lexer.advance_n(matched.len());
    lexer.line += matched.matches('\n').count();
    lexer.line_start = lexer.pos;
    Ok(None)
}

fn int_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    let value = matched.parse::<i64>().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: String::from(matched),
            },
            lexer.current_position(),
        )
    })?;

    let token = MK_TOKEN!(
        TokenKind::Int,
        String::from(matched),
        TokenValue::Int(value),
        lexer.span_for(matched.len())
    );
    lexer.advance_n(matched.len());
    Ok(Some(token))
}

fn real_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    let value = matched.parse::<f64>().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: String::from(matched),
            },
            lexer.current_position(),
        )
    })?;

    let token = MK_TOKEN!(
        TokenKind::Real,
        String::from(matched),
        TokenValue::Real(value),
        lexer.span_for(matched.len())
    );
    lexer.advance_n(matched.len());
    Ok(Some(token))
}

fn bool_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    let (kind, value) = if matched == "true" {
        (TokenKind::True, true)
    } else {
        (TokenKind::False, false)
    };

    let token = MK_TOKEN!(
        kind,
        String::from(matched),
        TokenValue::Bool(value),
        lexer.span_for(matched.len())
    );
    lexer.advance_n(matched.len());
    Ok(Some(token))
}

// Greedy: runs to the last quote on the line, not the nearest one.
fn string_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    let token = MK_TOKEN!(
        TokenKind::String,
        String::from(matched),
        TokenValue::Str(String::from(matched)),
        lexer.span_for(matched.len())
    );
    lexer.advance_n(matched.len());
    Ok(Some(token))
}

fn identifier_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    let token = MK_TOKEN!(
        TokenKind::Identifier,
        String::from(matched),
        TokenValue::Ident(String::from(matched)),
        lexer.span_for(matched.len())
    );
    lexer.advance_n(matched.len());
    Ok(Some(token))
}

/// Tokenizes the whole source at once. The last token is always `EOF`.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    Lexer::new(source, file).collect()
}
