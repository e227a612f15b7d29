//! Buffered file output. Log calls append to an in-memory buffer; the flush
//! daemon (or an explicit [`flush`](FileSink::flush)) drains it to disk.

use crate::fmt::{Message, format_timestamp};
use crate::severity::Severity;

use chrono::Local;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Capacity hint for a freshly constructed buffer; growth is unbounded.
const INITIAL_BUFFER_CAPACITY: usize = 3072;

/// Accumulates rendered lines in memory so log calls never block on file I/O.
///
/// Append and flush share one lock, so a flush never observes a
/// partially-written line. Each flush replaces the destination file's
/// contents with the buffer's accumulated bytes; lines from earlier flush
/// cycles are overwritten, not appended to. Known quirk, kept so existing
/// consumers of the file format see no change.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    buffer: Mutex<Vec<u8>>,
    flush_failures: AtomicU64,
}

impl FileSink {
    /// `~` in the path is expanded; an empty path disables writing while
    /// still accepting (and discarding) appends.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let path_str = path.to_string_lossy();
        let expanded = shellexpand::tilde(path_str.as_ref());

        Self {
            path: PathBuf::from(expanded.as_ref()),
            buffer: Mutex::new(Vec::with_capacity(INITIAL_BUFFER_CAPACITY)),
            flush_failures: AtomicU64::new(0),
        }
    }

    /// Appends `TAG TIMESTAMP: MESSAGE\n` to the in-memory buffer. No file
    /// I/O happens here. A poisoned lock drops the line instead of panicking.
    pub fn append(&self, severity: Severity, message: &Message<'_>) {
        let Ok(mut buffer) = self.buffer.lock() else {
            return;
        };

        buffer.extend_from_slice(severity.tag().as_bytes());
        let _ = write!(buffer, "{}: ", format_timestamp(&Local::now()));
        let _ = write!(buffer, "{message}");
        buffer.push(b'\n');
    }

    /// Drains the buffer: if it is non-empty and a destination path is
    /// configured, the buffer's bytes replace the file's contents. The buffer
    /// is cleared unconditionally afterwards, so lines are discarded even
    /// when the path is missing or the write failed. Failures increment
    /// [`flush_failures`](Self::flush_failures) for callers that swallow the
    /// returned error.
    ///
    /// # Errors
    /// The underlying write error, when one occurred.
    pub fn flush(&self) -> io::Result<()> {
        let Ok(mut buffer) = self.buffer.lock() else {
            return Ok(());
        };

        let result = if !buffer.is_empty() && !self.path.as_os_str().is_empty() {
            fs::write(&self.path, buffer.as_slice())
        } else {
            Ok(())
        };
        buffer.clear();

        if result.is_err() {
            self.flush_failures.fetch_add(1, Ordering::Relaxed);
        }
        result
    }

    /// Bytes currently waiting for the next flush cycle.
    #[must_use]
    pub fn buffered_len(&self) -> usize {
        self.buffer.lock().map_or(0, |buffer| buffer.len())
    }

    /// Count of flush cycles whose file write failed. The buffered lines of
    /// those cycles are gone; this counter is the only trace of them.
    #[must_use]
    pub fn flush_failures(&self) -> u64 {
        self.flush_failures.load(Ordering::Relaxed)
    }
}
