//! Human-readable output:
//!
//! ```text
//! [line 3] Error[E0002]: Unexpected character.
//!   = note: found '@' (U+0040)
//! error: aborting due to previous error
//! ```

use std::io::Write;

use crate::{Diagnostic, Severity};

use super::DiagnosticEmitter;

/// When to color terminal output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// ANSI styles used by the emitter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Style {
    Error,
    Warning,
    Note,
    Bold,
}

impl Style {
    const RESET: &'static str = "\x1b[0m";

    fn ansi(self) -> &'static str {
        match self {
            Style::Error => "\x1b[1;31m",
            Style::Warning => "\x1b[1;33m",
            Style::Note => "\x1b[1;36m",
            Style::Bold => "\x1b[1m",
        }
    }

    fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Error => Style::Error,
            Severity::Warning => Style::Warning,
            Severity::Note => Style::Note,
        }
    }
}

/// Label and remainder of the closing summary, or `None` when there is
/// nothing to summarize.
fn summary(error_count: usize, warning_count: usize) -> Option<(Style, &'static str, String)> {
    let warnings = match warning_count {
        1 => "1 warning emitted".to_owned(),
        n => format!("{n} warnings emitted"),
    };
    match (error_count, warning_count) {
        (0, 0) => None,
        (0, _) => Some((Style::Warning, "warning", warnings)),
        (errors, _) => {
            let mut rest = match errors {
                1 => "aborting due to previous error".to_owned(),
                n => format!("aborting due to {n} previous errors"),
            };
            if warning_count > 0 {
                rest.push_str("; ");
                rest.push_str(&warnings);
            }
            Some((Style::Error, "error", rest))
        }
    }
}

/// Writes diagnostics in the one-line `[line N]` form.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// `is_tty` is whether `writer` is a terminal; it decides
    /// [`ColorMode::Auto`].
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    fn styled(&mut self, style: Style, text: &str) {
        let _ = if self.colors {
            write!(self.writer, "{}{text}{}", style.ansi(), Style::RESET)
        } else {
            write!(self.writer, "{text}")
        };
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let _ = write!(self.writer, "[line {}] ", diagnostic.line);
        let label = match diagnostic.severity {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Note => "Note",
        };
        self.styled(Style::for_severity(diagnostic.severity), label);
        if let Some(code) = diagnostic.code {
            self.styled(Style::Bold, &format!("[{code}]"));
        }
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.styled(Style::Bold, "note");
            let _ = writeln!(self.writer, ": {note}");
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if let Some((style, label, rest)) = summary(error_count, warning_count) {
            self.styled(style, label);
            let _ = writeln!(self.writer, ": {rest}");
        }
    }
}
