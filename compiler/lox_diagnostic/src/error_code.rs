use std::fmt;

/// Error codes for scanner diagnostics.
///
/// Format: E#### where the first digit is the phase. Only lexer codes
/// (E0xxx) exist today; later phases take the next thousand.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Unterminated string literal
    E0001,
    /// Unexpected character in source
    E0002,
    /// Invalid number literal
    E0003,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: [ErrorCode; 3] = [ErrorCode::E0001, ErrorCode::E0002, ErrorCode::E0003];

    /// The code as printed in diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
        }
    }

    /// One-line explanation of the code.
    pub const fn description(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "a string literal has no closing `\"` before the end of input",
            ErrorCode::E0002 => "a character does not start any token",
            ErrorCode::E0003 => "a number literal has a `.` that is not followed by a digit",
        }
    }

    pub fn is_lexer_error(self) -> bool {
        self.as_str().starts_with("E0")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
