use super::*;
use pretty_assertions::assert_eq;

#[test]
fn kind_messages_are_fixed() {
    assert_eq!(
        LexErrorKind::UnterminatedString.to_string(),
        "Unterminated string."
    );
    assert_eq!(
        LexErrorKind::UnexpectedCharacter { found: '@' }.to_string(),
        "Unexpected character."
    );
    assert_eq!(
        LexErrorKind::InvalidNumberFormat.to_string(),
        "Invalid number format."
    );
}

#[test]
fn kind_codes() {
    assert_eq!(LexErrorKind::UnterminatedString.code(), ErrorCode::E0001);
    assert_eq!(
        LexErrorKind::UnexpectedCharacter { found: '#' }.code(),
        ErrorCode::E0002
    );
    assert_eq!(LexErrorKind::InvalidNumberFormat.code(), ErrorCode::E0003);
}

#[test]
fn error_display_includes_line() {
    let err = LexError::unterminated_string(4, Span::new(10, 20));
    assert_eq!(err.to_string(), "[line 4] Unterminated string.");
}

#[test]
fn unexpected_character_diagnostic() {
    let diag = LexError::unexpected_character('@', 2, Span::new(5, 6)).into_diagnostic();
    assert_eq!(diag.code, Some(ErrorCode::E0002));
    assert_eq!(diag.line, 2);
    assert_eq!(diag.message, "Unexpected character.");
    assert_eq!(diag.span, Some(Span::new(5, 6)));
    assert_eq!(diag.notes, vec!["found '@' (U+0040)".to_owned()]);
    assert!(diag.is_error());
}

#[test]
fn unexpected_multibyte_character_note() {
    let diag = LexError::unexpected_character('é', 1, Span::new(0, 2)).into_diagnostic();
    assert_eq!(diag.notes, vec!["found 'é' (U+00E9)".to_owned()]);
}

#[test]
fn unterminated_string_diagnostic() {
    let diag = LexError::unterminated_string(3, Span::new(0, 9)).into_diagnostic();
    assert_eq!(diag.code, Some(ErrorCode::E0001));
    assert_eq!(diag.message, "Unterminated string.");
    assert_eq!(diag.notes.len(), 1);
}

#[test]
fn invalid_number_diagnostic() {
    let diag = LexError::invalid_number_format(1, Span::new(0, 2)).into_diagnostic();
    assert_eq!(diag.code, Some(ErrorCode::E0003));
    assert_eq!(diag.message, "Invalid number format.");
    assert_eq!(diag.to_string(), "[line 1] Error[E0003]: Invalid number format.");
}
