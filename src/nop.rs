//! A logger that discards everything. For consumers' tests and benchmarks
//! that need a `Logger` but no output.

use crate::fmt::Message;
use crate::logger::Logger;
use crate::severity::Severity;

/// Silent `Logger` implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NopLogger;

impl Logger for NopLogger {
    fn log(&self, _severity: Severity, _message: Message<'_>) {}
}
