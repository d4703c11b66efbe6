//! The scanner: one pass over the source, one token at a time.
//!
//! Each call to `scan_token` marks the start of a lexeme, dispatches on
//! its first character and consumes the rest of it. Whitespace and
//! comments produce nothing. Malformed input is reported to the
//! [`Diagnostics`] collaborator and skipped; the loop always reaches the
//! end of input and seals the list with one END token.

use lox_diagnostic::Diagnostics;
use lox_ir::{Literal, Span, Token, TokenKind, TokenList};
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::lex_error::LexError;
use crate::literal::{decode_number, decode_string};

/// Single-use scanner over one source string.
///
/// Construct with [`Scanner::new`] and run with
/// [`Scanner::scan_tokens`], which consumes it.
pub struct Scanner<'src, 'd, D: Diagnostics + ?Sized> {
    cursor: Cursor<'src>,
    tokens: Vec<Token>,
    diagnostics: &'d mut D,
}

impl<'src, 'd, D: Diagnostics + ?Sized> Scanner<'src, 'd, D> {
    pub fn new(source: &'src str, diagnostics: &'d mut D) -> Self {
        Scanner {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
            diagnostics,
        }
    }

    /// Scan the whole source.
    ///
    /// Never fails: every problem goes to the collaborator and the result
    /// always ends with exactly one END token.
    #[tracing::instrument(level = "debug", skip_all, fields(len = self.cursor.source_len()))]
    pub fn scan_tokens(mut self) -> TokenList {
        while !self.cursor.is_at_end() {
            self.cursor.start_lexeme();
            self.scan_token();
        }

        let end_line = self.cursor.line();
        let end_offset = u32::try_from(self.cursor.pos()).unwrap_or(u32::MAX);
        debug!(tokens = self.tokens.len(), lines = end_line, "scan complete");
        TokenList::terminated(self.tokens, end_line, end_offset)
    }

    fn scan_token(&mut self) {
        let c = self.cursor.advance();
        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '!' => self.one_or_two('=', TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.one_or_two('=', TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.one_or_two('=', TokenKind::LessEqual, TokenKind::Less),
            '>' => self.one_or_two('=', TokenKind::GreaterEqual, TokenKind::Greater),
            '/' => {
                if self.cursor.eat('/') {
                    self.cursor.eat_until_newline();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            // `advance` already counted the newline.
            ' ' | '\r' | '\t' | '\n' => {}
            '"' => self.string(),
            '0'..='9' => self.number(),
            found => {
                let err =
                    LexError::unexpected_character(found, self.cursor.line(), self.cursor.span());
                self.report(err);
            }
        }
    }

    /// `second` follows: emit `double`, otherwise `single`.
    fn one_or_two(&mut self, second: char, double: TokenKind, single: TokenKind) {
        let kind = if self.cursor.eat(second) {
            double
        } else {
            single
        };
        self.add_token(kind);
    }

    /// Opening quote already consumed.
    fn string(&mut self) {
        if !self.cursor.eat_string_body() {
            let err = LexError::unterminated_string(self.cursor.line(), self.cursor.span());
            self.report(err);
            return;
        }
        self.cursor.advance();

        // Both quotes are in the lexeme now, so decoding cannot fail.
        let decoded = decode_string(self.cursor.lexeme());
        debug_assert!(decoded.is_ok(), "closed string failed to decode: {decoded:?}");
        if let Ok(body) = decoded {
            self.add_literal(TokenKind::String, Literal::String(body.to_owned()));
        }
    }

    /// First digit already consumed.
    fn number(&mut self) {
        self.cursor.eat_while(|c| c.is_ascii_digit());

        if self.cursor.peek() == '.' {
            if self.cursor.peek_next().is_ascii_digit() {
                self.cursor.advance();
                self.cursor.eat_while(|c| c.is_ascii_digit());
            } else {
                // The `.` stays unconsumed and scans next as DOT.
                let digits = self.cursor.span();
                let span = Span::new(digits.start, digits.end.saturating_add(1));
                let err = LexError::invalid_number_format(self.cursor.line(), span);
                self.report(err);
                return;
            }
        }

        let lexeme = self.cursor.lexeme();
        match decode_number(lexeme) {
            Ok(value) => self.add_literal(TokenKind::Number, Literal::Number(value)),
            Err(err) => {
                debug!(%err, lexeme, "number literal rejected");
                let err = LexError::invalid_number_format(self.cursor.line(), self.cursor.span());
                self.report(err);
            }
        }
    }

    fn report(&mut self, err: LexError) {
        debug!(line = err.line, span = %err.span, kind = ?err.kind, "lexical error");
        self.diagnostics.report_diagnostic(err.into_diagnostic());
    }

    #[inline]
    fn add_token(&mut self, kind: TokenKind) {
        self.push(kind, None);
    }

    #[inline]
    fn add_literal(&mut self, kind: TokenKind, literal: Literal) {
        self.push(kind, Some(literal));
    }

    fn push(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let token = Token::new(
            kind,
            self.cursor.lexeme(),
            literal,
            self.cursor.start_line(),
            self.cursor.span(),
        );
        trace!(?token, "token");
        self.tokens.push(token);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
