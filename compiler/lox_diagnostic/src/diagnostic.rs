use std::fmt;

use lox_ir::Span;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// A reported problem, tied to the source line where it was detected.
///
/// Built with the `with_*` methods:
///
/// ```text
/// Diagnostic::error(ErrorCode::E0002)
///     .at_line(3)
///     .with_message("Unexpected character.")
///     .with_span(Span::new(14, 15))
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    /// Error code, absent for plain `report(line, message)` calls.
    pub code: Option<ErrorCode>,
    pub severity: Severity,
    pub message: String,
    /// 1-based source line.
    pub line: u32,
    /// Byte range of the offending text, when known.
    pub span: Option<Span>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create an error diagnostic with a code.
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code: Some(code),
            severity: Severity::Error,
            message: String::new(),
            line: 1,
            span: None,
            notes: Vec::new(),
        }
    }

    /// Create a warning diagnostic with a code.
    pub fn warning(code: ErrorCode) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            ..Self::error(code)
        }
    }

    /// Create an uncoded error from a bare `(line, message)` report.
    pub fn report(line: u32, message: impl Into<String>) -> Self {
        Diagnostic {
            code: None,
            severity: Severity::Error,
            message: message.into(),
            line,
            span: None,
            notes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub fn at_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Classic one-line form: `[line 3] Error: Unexpected character.`
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Note => "Note",
        };
        write!(f, "[line {}] {severity}", self.line)?;
        if let Some(code) = self.code {
            write!(f, "[{code}]")?;
        }
        write!(f, ": {}", self.message)
    }
}
