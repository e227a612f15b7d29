//! Console output, synchronous and unbuffered.

use crate::fmt::{Message, format_timestamp};
use crate::severity::Severity;

use chrono::Local;
use std::io::{self, Write};
use std::sync::Mutex;

/// Writes one line per log call directly to standard output. The lock is held
/// for the whole line so one call's segments never interleave with another's.
#[derive(Debug, Default)]
pub struct ConsoleSink {
    lock: Mutex<()>,
}

impl ConsoleSink {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lock: Mutex::new(()),
        }
    }

    /// Emits `TAG TIMESTAMP: MESSAGE\n` as four separate writes under the
    /// lock. Write errors are discarded: logging must never break the caller.
    /// A poisoned lock drops the line instead of panicking.
    pub fn write(&self, severity: Severity, message: &Message<'_>) {
        let Ok(_guard) = self.lock.lock() else { return };

        let mut out = io::stdout();
        let _ = out.write_all(severity.tag().as_bytes());
        let _ = write!(out, "{}: ", format_timestamp(&Local::now()));
        let _ = write!(out, "{message}");
        let _ = out.write_all(b"\n");
    }
}
