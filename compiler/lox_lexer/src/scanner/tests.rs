use super::*;
use lox_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode};
use pretty_assertions::assert_eq;

/// Minimal collaborator: implements only `report`.
#[derive(Default)]
struct Recorder {
    calls: Vec<(u32, String)>,
}

impl Diagnostics for Recorder {
    fn report(&mut self, line: u32, message: &str) {
        self.calls.push((line, message.to_owned()));
    }
}

fn scan_recorded(source: &str) -> (TokenList, Vec<(u32, String)>) {
    let mut recorder = Recorder::default();
    let tokens = Scanner::new(source, &mut recorder).scan_tokens();
    (tokens, recorder.calls)
}

fn kinds(source: &str) -> Vec<TokenKind> {
    let (tokens, calls) = scan_recorded(source);
    assert!(calls.is_empty(), "unexpected diagnostics for {source:?}: {calls:?}");
    tokens.kinds().collect()
}

// === Termination ===

#[test]
fn empty_source_is_just_end() {
    let (tokens, calls) = scan_recorded("");
    assert_eq!(tokens.len(), 1);
    let end = tokens.end();
    assert_eq!(end.kind, TokenKind::End);
    assert_eq!(end.lexeme, "");
    assert_eq!(end.literal, None);
    assert_eq!(end.line, 1);
    assert!(calls.is_empty());
}

#[test]
fn end_token_carries_final_line() {
    let (tokens, _) = scan_recorded("+\n-\n\n");
    assert_eq!(tokens.end().line, 4);
    assert_eq!(tokens.end().span, Span::point(5));
}

#[test]
fn whitespace_only_is_just_end() {
    assert_eq!(kinds(" \t\r \r\n"), vec![TokenKind::End]);
}

// === Single and Double Characters ===

#[test]
fn single_character_tokens() {
    assert_eq!(
        kinds("(){},.-+;*/"),
        vec![
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::RightBrace,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::Minus,
            TokenKind::Plus,
            TokenKind::Semicolon,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::End,
        ]
    );
}

#[test]
fn bang_equal_is_one_token() {
    let (tokens, _) = scan_recorded("!=");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::BangEqual);
    assert_eq!(tokens[0].lexeme, "!=");
    assert_eq!(tokens[0].span, Span::new(0, 2));
}

#[test]
fn two_character_operators() {
    assert_eq!(
        kinds("!= == <= >="),
        vec![
            TokenKind::BangEqual,
            TokenKind::EqualEqual,
            TokenKind::LessEqual,
            TokenKind::GreaterEqual,
            TokenKind::End,
        ]
    );
}

#[test]
fn one_character_fallbacks() {
    assert_eq!(
        kinds("! = < >"),
        vec![
            TokenKind::Bang,
            TokenKind::Equal,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::End,
        ]
    );
}

#[test]
fn less_then_non_equal_is_less() {
    assert_eq!(
        kinds("<("),
        vec![TokenKind::Less, TokenKind::LeftParen, TokenKind::End]
    );
}

#[test]
fn maximal_munch_pairs_greedily() {
    assert_eq!(
        kinds("===!=="),
        vec![
            TokenKind::EqualEqual,
            TokenKind::Equal,
            TokenKind::BangEqual,
            TokenKind::Equal,
            TokenKind::End,
        ]
    );
}

// === Comments ===

#[test]
fn comment_runs_to_newline() {
    let (tokens, calls) = scan_recorded("1 // comment\n2");
    assert!(calls.is_empty());
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn comment_at_end_of_input() {
    assert_eq!(kinds("+ // trailing"), vec![TokenKind::Plus, TokenKind::End]);
}

#[test]
fn comment_swallows_bad_characters() {
    assert_eq!(kinds("// @ # \"open"), vec![TokenKind::End]);
}

#[test]
fn slash_without_second_slash() {
    assert_eq!(
        kinds("/ /"),
        vec![TokenKind::Slash, TokenKind::Slash, TokenKind::End]
    );
}

// === Strings ===

#[test]
fn string_literal() {
    let (tokens, calls) = scan_recorded("\"hello\"");
    assert!(calls.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, "\"hello\"");
    assert_eq!(tokens[0].literal, Some(Literal::String("hello".to_owned())));
}

#[test]
fn empty_string_literal() {
    let (tokens, _) = scan_recorded("\"\"");
    assert_eq!(tokens[0].literal, Some(Literal::String(String::new())));
}

#[test]
fn multiline_string_advances_line() {
    let (tokens, calls) = scan_recorded("\"ab\ncd\" +");
    assert!(calls.is_empty());
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].literal, Some(Literal::String("ab\ncd".to_owned())));
    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].kind, TokenKind::Plus);
    assert_eq!(tokens[1].line, 2);
    assert_eq!(tokens.end().line, 2);
}

#[test]
fn backslash_is_ordinary() {
    let (tokens, _) = scan_recorded(r#""a\nb""#);
    assert_eq!(tokens[0].literal, Some(Literal::String(r"a\nb".to_owned())));
}

#[test]
fn closed_strings_never_report() {
    for source in ["\"\"\"\"", "\"//\"", "\"a\"\"b\"", "\"\n\n\"", "\"@ 3.\""] {
        let (tokens, calls) = scan_recorded(source);
        assert!(calls.is_empty(), "{source:?}: {calls:?}");
        for token in tokens.without_end() {
            assert_eq!(token.kind, TokenKind::String, "{source:?}");
            let inner = &token.lexeme[1..token.lexeme.len() - 1];
            assert_eq!(token.literal, Some(Literal::String(inner.to_owned())));
        }
    }
}

#[test]
fn unterminated_string() {
    let (tokens, calls) = scan_recorded("\"abc");
    assert_eq!(tokens.kinds().collect::<Vec<_>>(), vec![TokenKind::End]);
    assert_eq!(calls, vec![(1, "Unterminated string.".to_owned())]);
}

#[test]
fn unterminated_string_reports_exhaustion_line() {
    let (tokens, calls) = scan_recorded("+ \"one\ntwo\nthree");
    assert_eq!(
        tokens.kinds().collect::<Vec<_>>(),
        vec![TokenKind::Plus, TokenKind::End]
    );
    assert_eq!(calls, vec![(3, "Unterminated string.".to_owned())]);
    assert_eq!(tokens.end().line, 3);
}

// === Numbers ===

#[test]
fn integer_number() {
    let (tokens, _) = scan_recorded("123");
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].lexeme, "123");
    assert_eq!(tokens[0].literal, Some(Literal::Number(123.0)));
}

#[test]
fn decimal_number() {
    let (tokens, calls) = scan_recorded("3.14");
    assert!(calls.is_empty());
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].lexeme, "3.14");
    assert_eq!(
        tokens[0].literal,
        Some(Literal::Number("3.14".parse::<f64>().unwrap()))
    );
}

#[test]
fn trailing_dot_is_invalid_number() {
    let (tokens, calls) = scan_recorded("3.");
    assert_eq!(calls, vec![(1, "Invalid number format.".to_owned())]);
    assert!(tokens.iter().all(|t| t.kind != TokenKind::Number));
    assert_eq!(
        tokens.kinds().collect::<Vec<_>>(),
        vec![TokenKind::Dot, TokenKind::End]
    );
}

#[test]
fn trailing_dot_does_not_poison_later_numbers() {
    let (tokens, calls) = scan_recorded("1. 2");
    assert_eq!(calls.len(), 1);
    assert_eq!(
        tokens.kinds().collect::<Vec<_>>(),
        vec![TokenKind::Dot, TokenKind::Number, TokenKind::End]
    );
    assert_eq!(tokens[1].literal, Some(Literal::Number(2.0)));
}

#[test]
fn leading_dot_is_dot_then_number() {
    assert_eq!(
        kinds(".5"),
        vec![TokenKind::Dot, TokenKind::Number, TokenKind::End]
    );
}

#[test]
fn method_style_dot_after_number() {
    // `1.2.3` is NUMBER(1.2) DOT NUMBER(3).
    let (tokens, calls) = scan_recorded("1.2.3");
    assert!(calls.is_empty());
    assert_eq!(tokens[0].literal, Some(Literal::Number(1.2)));
    assert_eq!(tokens[1].kind, TokenKind::Dot);
    assert_eq!(tokens[2].literal, Some(Literal::Number(3.0)));
}

#[test]
fn minus_is_not_part_of_number() {
    assert_eq!(
        kinds("-7"),
        vec![TokenKind::Minus, TokenKind::Number, TokenKind::End]
    );
}

// === Unexpected Characters ===

#[test]
fn unexpected_character_is_skipped() {
    let (tokens, calls) = scan_recorded("@");
    assert_eq!(tokens.kinds().collect::<Vec<_>>(), vec![TokenKind::End]);
    assert_eq!(calls, vec![(1, "Unexpected character.".to_owned())]);
}

#[test]
fn scanning_resumes_after_unexpected_character() {
    let (tokens, calls) = scan_recorded("(\n@)");
    assert_eq!(calls, vec![(2, "Unexpected character.".to_owned())]);
    assert_eq!(
        tokens.kinds().collect::<Vec<_>>(),
        vec![TokenKind::LeftParen, TokenKind::RightParen, TokenKind::End]
    );
    assert_eq!(tokens[1].span, Span::new(3, 4));
}

#[test]
fn identifiers_are_unexpected() {
    let (tokens, calls) = scan_recorded("ab");
    assert_eq!(tokens.len(), 1);
    assert_eq!(calls.len(), 2);
}

#[test]
fn multibyte_character_reported_once() {
    let (tokens, calls) = scan_recorded("é+");
    assert_eq!(calls, vec![(1, "Unexpected character.".to_owned())]);
    assert_eq!(tokens[0].kind, TokenKind::Plus);
    assert_eq!(tokens[0].span, Span::new(2, 3));
}

#[test]
fn interior_nul_is_unexpected() {
    let (tokens, calls) = scan_recorded("\0;");
    assert_eq!(calls.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Semicolon);
}

// === Lines and Spans ===

#[test]
fn token_lines_follow_newlines() {
    let (tokens, _) = scan_recorded("(\n)\n\n{");
    let lines: Vec<u32> = tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 2, 4, 4]);
}

#[test]
fn spans_index_the_source() {
    let source = "  (== \"s\" 12.5";
    let (tokens, _) = scan_recorded(source);
    for token in tokens.without_end() {
        assert_eq!(&source[token.span.to_range()], token.lexeme);
    }
}

// === Collaborators ===

#[test]
fn closure_collaborator() {
    let mut seen = Vec::new();
    let mut sink = |line: u32, message: &str| seen.push((line, message.to_owned()));
    let tokens = Scanner::new("#", &mut sink).scan_tokens();
    assert_eq!(tokens.len(), 1);
    assert_eq!(seen, vec![(1, "Unexpected character.".to_owned())]);
}

#[test]
fn dyn_collaborator() {
    let mut recorder = Recorder::default();
    let sink: &mut dyn Diagnostics = &mut recorder;
    let tokens = Scanner::new("\"x", sink).scan_tokens();
    assert_eq!(tokens.len(), 1);
    assert_eq!(recorder.calls.len(), 1);
}

#[test]
fn queue_keeps_codes_and_spans() {
    let mut queue = DiagnosticQueue::new();
    let _ = Scanner::new("12.\n@\n\"open", &mut queue).scan_tokens();
    let diags: Vec<Diagnostic> = queue.flush();
    let codes: Vec<Option<ErrorCode>> = diags.iter().map(|d| d.code).collect();
    assert_eq!(
        codes,
        vec![
            Some(ErrorCode::E0003),
            Some(ErrorCode::E0002),
            Some(ErrorCode::E0001),
        ]
    );
    assert_eq!(diags[0].span, Some(Span::new(0, 3)));
    assert_eq!(diags[1].span, Some(Span::new(4, 5)));
    assert_eq!(diags[2].span, Some(Span::new(6, 11)));
    assert_eq!(diags[2].line, 3);
}
