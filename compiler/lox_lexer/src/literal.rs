//! Pure literal decoders.
//!
//! These turn lexeme text into literal values without touching scanner
//! state, so numeric and string edge cases are testable on their own.
//! The scanner only hands them text its own grammar already accepted.

use thiserror::Error;

/// Why a lexeme could not be decoded.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LiteralError {
    #[error("empty number literal")]
    Empty,
    #[error("unexpected `{found}` at offset {offset} in number literal")]
    UnexpectedChar { found: char, offset: usize },
    #[error("`.` in a number literal must be followed by at least one digit")]
    MissingFraction,
    #[error("number literal could not be parsed: {0}")]
    Parse(#[from] std::num::ParseFloatError),
    #[error("string literal must be enclosed in `\"`")]
    MissingQuotes,
}

/// Decode a number lexeme.
///
/// Accepts exactly `DIGIT+ ( "." DIGIT+ )?`. No sign, no exponent, no
/// leading or trailing `.`.
pub fn decode_number(text: &str) -> Result<f64, LiteralError> {
    if text.is_empty() {
        return Err(LiteralError::Empty);
    }

    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text, None),
    };

    if integer.is_empty() {
        return Err(LiteralError::UnexpectedChar {
            found: '.',
            offset: 0,
        });
    }
    check_digits(integer, 0)?;

    if let Some(fraction) = fraction {
        if fraction.is_empty() {
            return Err(LiteralError::MissingFraction);
        }
        check_digits(fraction, integer.len() + 1)?;
    }

    Ok(text.parse::<f64>()?)
}

/// Strip the enclosing quotes from a string lexeme.
///
/// The body is returned verbatim: a backslash has no special meaning.
pub fn decode_string(lexeme: &str) -> Result<&str, LiteralError> {
    lexeme
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or(LiteralError::MissingQuotes)
}

fn check_digits(part: &str, base_offset: usize) -> Result<(), LiteralError> {
    match part.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        Some((offset, found)) => Err(LiteralError::UnexpectedChar {
            found,
            offset: base_offset + offset,
        }),
        None => Ok(()),
    }
}
