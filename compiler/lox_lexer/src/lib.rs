//! Lexical scanner for Lox.
//!
//! Turns source text into a [`TokenList`] of punctuation, operators,
//! string literals and number literals, ending in one END token. The
//! scanner never fails: lexical errors go to a [`Diagnostics`]
//! collaborator and scanning continues.
//!
//! # Architecture
//!
//! - `cursor`: character cursor with lookahead and line tracking
//! - `literal`: pure decoders for number and string lexemes
//! - `lex_error`: error kinds and their diagnostic form
//! - `scanner`: the dispatch loop
//!
//! ```text
//! let mut queue = DiagnosticQueue::new();
//! let tokens = lox_lexer::scan("(1 + 2) * 3.5", &mut queue);
//! if let Some(guarantee) = queue.has_errors() { ... }
//! ```
//!
//! The default queue keeps at most ten errors and drops an error whose
//! `(line, message)` it already holds, so `"@#"` keeps one of its two
//! reports. Use `DiagnosticConfig::unlimited()` (or
//! [`lex_with_diagnostics`]) to keep every report.

mod cursor;
mod lex_error;
mod literal;
mod scanner;

use lox_diagnostic::{Diagnostic, DiagnosticConfig, DiagnosticQueue, Diagnostics};
use lox_ir::TokenList;

pub use lex_error::{LexError, LexErrorKind};
pub use literal::{decode_number, decode_string, LiteralError};
pub use scanner::Scanner;

/// Scan `source`, reporting lexical errors to `diagnostics`.
pub fn scan<D: Diagnostics + ?Sized>(source: &str, diagnostics: &mut D) -> TokenList {
    Scanner::new(source, diagnostics).scan_tokens()
}

/// Scan `source` and collect every lexical error, sorted by line.
pub fn lex_with_diagnostics(source: &str) -> (TokenList, Vec<Diagnostic>) {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    let tokens = scan(source, &mut queue);
    (tokens, queue.flush())
}
