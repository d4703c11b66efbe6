//! Collecting diagnostics across a scan.
//!
//! [`DiagnosticQueue`] is the ready-made [`Diagnostics`] collaborator. It
//! keeps every diagnostic in report order, caps the number of errors it
//! keeps and drops repeats of an error already seen on the same line.
//! Since the scanner keeps no error state, the queue is where "did this
//! source have lexical errors" gets answered, via
//! [`has_errors`](DiagnosticQueue::has_errors).

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::{Diagnostic, Diagnostics, ErrorGuaranteed};

/// Limits applied by a [`DiagnosticQueue`].
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Errors kept before further errors are dropped. `0` means no cap.
    pub error_limit: usize,
    /// Drop an error whose `(line, message)` was already kept.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 10,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// Keep everything. Used by `lex_with_diagnostics` and in tests.
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

/// Why [`DiagnosticQueue::add`] dropped a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Dropped {
    OverLimit,
    Duplicate,
}

/// Diagnostics in report order, with error limiting and deduplication.
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// let tokens = scan(source, &mut queue);
/// for diag in queue.flush() {
///     eprintln!("{diag}");
/// }
/// ```
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    errors: usize,
    suppressed: usize,
    seen: FxHashSet<(u32, String)>,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &DiagnosticConfig {
        &self.config
    }

    /// Record `diag` unless the config filters it.
    ///
    /// Returns whether it was kept. Warnings and notes are never filtered.
    pub fn add(&mut self, diag: Diagnostic) -> bool {
        if diag.is_error() {
            if let Err(reason) = self.admit_error(&diag) {
                trace!(?reason, line = diag.line, message = %diag.message, "diagnostic dropped");
                self.suppressed += 1;
                return false;
            }
            self.errors += 1;
        }
        self.diagnostics.push(diag);
        true
    }

    fn admit_error(&mut self, diag: &Diagnostic) -> Result<(), Dropped> {
        if self.limit_reached() {
            return Err(Dropped::OverLimit);
        }
        if self.config.deduplicate && !self.seen.insert((diag.line, diag.message.clone())) {
            return Err(Dropped::Duplicate);
        }
        Ok(())
    }

    /// Record an error and get proof that one was reported.
    ///
    /// The proof holds even if this particular error was filtered.
    pub fn emit_error(&mut self, diag: Diagnostic) -> ErrorGuaranteed {
        self.add(diag);
        ErrorGuaranteed::new()
    }

    pub fn limit_reached(&self) -> bool {
        self.config.error_limit != 0 && self.errors >= self.config.error_limit
    }

    /// Errors kept so far.
    pub fn error_count(&self) -> usize {
        self.errors
    }

    /// Diagnostics dropped by the limit or by deduplication.
    pub fn suppressed_count(&self) -> usize {
        self.suppressed
    }

    pub fn has_errors(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.errors)
    }

    /// Take every diagnostic, sorted by line, and reset the queue.
    ///
    /// Diagnostics on the same line stay in report order.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let mut flushed = std::mem::take(&mut self.diagnostics);
        flushed.sort_by_key(|d| d.line);
        *self = DiagnosticQueue::with_config(self.config.clone());
        flushed
    }

    /// Diagnostics kept so far, in report order.
    pub fn peek(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }
}

impl Diagnostics for DiagnosticQueue {
    fn report(&mut self, line: u32, message: &str) {
        self.add(Diagnostic::report(line, message));
    }

    fn report_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.add(diagnostic);
    }
}
