//! The collaborator interface the scanner reports into.

use crate::Diagnostic;

/// Receiver for problems found while scanning.
///
/// The scanner calls into this synchronously and never looks at the
/// outcome. Implementations must not block.
///
/// Any `FnMut(u32, &str)` closure is a `Diagnostics`, which makes a
/// recording collaborator a one-liner:
///
/// ```text
/// let mut seen = Vec::new();
/// let tokens = scan("@", &mut |line, msg: &str| seen.push((line, msg.to_owned())));
/// ```
pub trait Diagnostics {
    /// Report an error at a 1-based source line.
    fn report(&mut self, line: u32, message: &str);

    /// Report a fully built diagnostic.
    ///
    /// The default forwards the line and message to [`report`](Self::report);
    /// collectors that keep codes and spans override it.
    fn report_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.report(diagnostic.line, &diagnostic.message);
    }
}

impl<F> Diagnostics for F
where
    F: FnMut(u32, &str),
{
    fn report(&mut self, line: u32, message: &str) {
        self(line, message);
    }
}
