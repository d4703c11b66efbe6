//! Rendering diagnostics for people and for tools.
//!
//! - [`TerminalEmitter`]: the classic `[line N] Error: message` form,
//!   optionally colored
//! - [`JsonEmitter`]: one JSON array, one object per diagnostic
//!
//! Emitters write to any [`std::io::Write`]. Write failures are ignored:
//! there is nowhere left to report them.

mod json;
mod terminal;

pub use json::JsonEmitter;
pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Sink for rendered diagnostics.
pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush buffered output.
    fn flush(&mut self);

    /// Closing line after all diagnostics, if the format has one.
    fn emit_summary(&mut self, error_count: usize, warning_count: usize);
}

/// Append `s` to `out` as a quoted JSON string.
pub(crate) fn push_json_str(out: &mut String, s: &str) {
    out.reserve(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                out.push_str(&format!("\\u{:04x}", u32::from(c)));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
