//! Diagnostic system for error reporting.
//!
//! The interpreter's phases report errors through a [`DiagnosticQueue`]
//! rather than aborting: the resolver in particular keeps traversing after
//! an error so several problems surface in one pass. Whether to continue to
//! the next phase after errors is the host's decision; the queue only
//! records and counts.

mod diagnostic;
mod emitter;
mod queue;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Severity};
pub use emitter::TerminalEmitter;
pub use queue::DiagnosticQueue;
