//! Lexical error values.
//!
//! A [`LexError`] pairs WHAT went wrong (`kind`) with WHERE (`line` and
//! `span`). The scanner builds one per problem and turns it into a
//! [`Diagnostic`] for the collaborator.
//!
//! The `Display` text of each kind is the exact message handed to
//! [`Diagnostics::report`](lox_diagnostic::Diagnostics::report).

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::Span;
use thiserror::Error;

/// What kind of lexical error occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    /// A `"` with no closing `"` before end of input.
    #[error("Unterminated string.")]
    UnterminatedString,
    /// A character that does not start any token.
    #[error("Unexpected character.")]
    UnexpectedCharacter { found: char },
    /// A `.` after the integer digits of a number with no digit after it.
    #[error("Invalid number format.")]
    InvalidNumberFormat,
}

impl LexErrorKind {
    /// Stable code for this kind.
    pub fn code(self) -> ErrorCode {
        match self {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::UnexpectedCharacter { .. } => ErrorCode::E0002,
            LexErrorKind::InvalidNumberFormat => ErrorCode::E0003,
        }
    }
}

/// A lexical error located in the source.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("[line {line}] {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    /// 1-based line reported to the collaborator.
    pub line: u32,
    /// Offending text.
    pub span: Span,
}

impl LexError {
    /// Opening quote through end of input.
    pub fn unterminated_string(line: u32, span: Span) -> Self {
        LexError {
            kind: LexErrorKind::UnterminatedString,
            line,
            span,
        }
    }

    pub fn unexpected_character(found: char, line: u32, span: Span) -> Self {
        LexError {
            kind: LexErrorKind::UnexpectedCharacter { found },
            line,
            span,
        }
    }

    /// `span` covers the integer digits and the dangling `.`.
    pub fn invalid_number_format(line: u32, span: Span) -> Self {
        LexError {
            kind: LexErrorKind::InvalidNumberFormat,
            line,
            span,
        }
    }

    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Build the diagnostic reported for this error.
    ///
    /// The message is always the kind's fixed text; detail such as the
    /// offending character goes into a note.
    pub fn into_diagnostic(self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .at_line(self.line)
            .with_message(self.kind.to_string())
            .with_span(self.span);
        match self.kind {
            LexErrorKind::UnterminatedString => {
                diag.with_note("add a closing `\"` to end the string")
            }
            LexErrorKind::UnexpectedCharacter { found } => {
                diag.with_note(format!("found {found:?} (U+{:04X})", u32::from(found)))
            }
            LexErrorKind::InvalidNumberFormat => {
                diag.with_note("a `.` in a number must be followed by a digit")
            }
        }
    }
}

#[cfg(test)]
mod tests;
