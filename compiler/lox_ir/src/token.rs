//! Token types produced by the Lox scanner.
//!
//! A [`Token`] is an immutable value: its kind, the exact lexeme it was
//! scanned from, an optional decoded [`Literal`], the line it starts on and
//! its byte span. Tokens are assembled once by the scanner and never mutated.

mod kind;
mod list;

pub use kind::TokenKind;
pub use list::{TokenList, TokenListError};

use std::fmt;

use super::Span;

/// Decoded value carried by literal tokens.
///
/// `Number` for NUMBER tokens, `String` (the text between the quotes,
/// verbatim) for STRING tokens.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Literal {
    Number(f64),
    String(String),
}

impl Literal {
    /// The numeric value, if this is a number literal.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Literal::Number(value) => Some(*value),
            Literal::String(_) => None,
        }
    }

    /// The string contents, if this is a string literal.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::String(value) => Some(value),
            Literal::Number(_) => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(value) => write!(f, "{value}"),
            Literal::String(value) => write!(f, "{value}"),
        }
    }
}

/// A scanned token.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text of the token. Empty for [`TokenKind::End`].
    pub lexeme: String,
    pub literal: Option<Literal>,
    /// 1-based line of the token's first character.
    pub line: u32,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Option<Literal>,
        line: u32,
        span: Span,
    ) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
            span,
        }
    }

    /// The terminal END token: empty lexeme, no literal.
    pub fn end(line: u32, offset: u32) -> Self {
        Token {
            kind: TokenKind::End,
            lexeme: String::new(),
            literal: None,
            line,
            span: Span::point(offset),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.lexeme)?;
        if let Some(literal) = &self.literal {
            write!(f, " {literal:?}")?;
        }
        write!(f, " @ {}:{}", self.line, self.span)
    }
}

/// One-line dump form: `KIND lexeme [literal]`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if !self.lexeme.is_empty() {
            write!(f, " {}", self.lexeme)?;
        }
        if let Some(literal) = &self.literal {
            write!(f, " {literal}")?;
        }
        Ok(())
    }
}
