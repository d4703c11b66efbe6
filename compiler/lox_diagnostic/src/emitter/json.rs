//! JSON output, one diagnostic object per line:
//!
//! ```text
//! [
//!   {"code":"E0002","severity":"error","message":"Unexpected character.","line":3,"span":{"start":14,"end":15},"notes":["found '@' (U+0040)"]}
//! ]
//! ```

use std::fmt::Write as _;
use std::io::Write;

use crate::Diagnostic;

use super::{push_json_str, DiagnosticEmitter};

/// Streams diagnostics as a JSON array.
///
/// The opening `[` is written with the first diagnostic and the closing `]`
/// by [`finish`](Self::finish), so an empty run still yields `[]`.
pub struct JsonEmitter<W: Write> {
    writer: W,
    emitted: usize,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new(writer: W) -> Self {
        JsonEmitter { writer, emitted: 0 }
    }

    /// Close the array. Call once, after the last diagnostic.
    pub fn finish(&mut self) {
        let _ = if self.emitted == 0 {
            writeln!(self.writer, "[]")
        } else {
            writeln!(self.writer, "\n]")
        };
    }
}

/// Render one diagnostic as a single-line JSON object.
fn to_json(diagnostic: &Diagnostic) -> String {
    let mut out = String::with_capacity(128);
    out.push_str("{\"code\":");
    match diagnostic.code {
        Some(code) => push_json_str(&mut out, code.as_str()),
        None => out.push_str("null"),
    }
    out.push_str(",\"severity\":");
    push_json_str(&mut out, &diagnostic.severity.to_string());
    out.push_str(",\"message\":");
    push_json_str(&mut out, &diagnostic.message);
    let _ = write!(out, ",\"line\":{}", diagnostic.line);
    match diagnostic.span {
        Some(span) => {
            let _ = write!(out, ",\"span\":{{\"start\":{},\"end\":{}}}", span.start, span.end);
        }
        None => out.push_str(",\"span\":null"),
    }
    out.push_str(",\"notes\":[");
    for (i, note) in diagnostic.notes.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_json_str(&mut out, note);
    }
    out.push_str("]}");
    out
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let lead = if self.emitted == 0 { "[\n  " } else { ",\n  " };
        let _ = write!(self.writer, "{lead}{}", to_json(diagnostic));
        self.emitted += 1;
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    /// No-op: the array is the whole report.
    fn emit_summary(&mut self, _error_count: usize, _warning_count: usize) {}
}
