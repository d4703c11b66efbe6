//! Diagnostic system for lexical error reporting.
//!
//! The scanner never fails: it reports each problem to a [`Diagnostics`]
//! collaborator and keeps going. This crate provides that collaborator
//! interface plus the pieces around it:
//! - Error codes for searchability
//! - Clear messages tied to a source line
//! - A queue that counts, limits and deduplicates errors
//! - Terminal and JSON emitters
//!
//! # Error Guarantees
//!
//! The `ErrorGuaranteed` type provides type-level proof that at least one
//! error was recorded. Callers use it to decide whether to continue on to
//! parsing:
//!
//! ```text
//! let tokens = scan(source, &mut queue);
//! if let Some(guarantee) = queue.has_errors() {
//!     return Err(guarantee);
//! }
//! ```

mod diagnostic;
pub mod emitter;
mod error_code;
mod guarantee;
pub mod queue;
mod sink;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use guarantee::ErrorGuaranteed;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
pub use sink::Diagnostics;
