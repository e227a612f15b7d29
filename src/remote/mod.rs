//! The remote destination: an externally-supplied structured-logging client.
//!
//! The logger treats the backend as opaque. It forwards a severity and an
//! already-rendered payload string (no tag, no timestamp; remote backends
//! attach their own) and never looks at the result. The client is shared
//! with the caller that constructed it and is never closed by the logger.

use crate::severity::Severity;

use chrono::Local;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use ulid::Ulid;

/// Structured-logging backend interface.
///
/// Fire-and-forget: the call may block according to the client's own
/// contract, but whatever it reports is not surfaced to the logging caller.
/// `Send + Sync` because the logger is shared across threads.
pub trait RemoteClient: Send + Sync {
    /// Accepts one entry. Failures stay inside the client.
    fn log(&self, severity: Severity, payload: &str);
}

/// Capturing client for tests and diagnostics: entries accumulate in memory
/// and can be inspected after the fact.
#[derive(Debug, Default)]
pub struct MemoryClient {
    entries: Mutex<Vec<(Severity, String)>>,
}

impl MemoryClient {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything received so far, in arrival order.
    #[must_use]
    pub fn entries(&self) -> Vec<(Severity, String)> {
        self.entries
            .lock()
            .map_or_else(|_| Vec::new(), |entries| entries.clone())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().map_or(0, |entries| entries.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RemoteClient for MemoryClient {
    fn log(&self, severity: Severity, payload: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((severity, payload.to_string()));
        }
    }
}

/// Flat schema, one object per line: `grep` and `jq` friendly.
#[derive(Debug, Serialize)]
struct JsonlEntry<'a> {
    /// ULID is time-sortable and collision-free across concurrent writers.
    id: String,
    /// RFC 3339 is the most widely supported machine-readable timestamp.
    ts: String,
    severity: &'a str,
    payload: &'a str,
}

/// File-backed reference client: appends one JSON object per line. Stands in
/// for a network backend in deployments that ship the file instead.
#[derive(Debug)]
pub struct JsonlClient {
    path: PathBuf,
    write_failures: AtomicU64,
}

impl JsonlClient {
    /// `~` in the path is expanded. The file and its parent directories are
    /// created on first write, not here.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let path_str = path.to_string_lossy();
        let expanded = shellexpand::tilde(path_str.as_ref());

        Self {
            path: PathBuf::from(expanded.as_ref()),
            write_failures: AtomicU64::new(0),
        }
    }

    /// Entries dropped because serialization or the file write failed. The
    /// public contract stays fire-and-forget; this counter is the only trace.
    #[must_use]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    fn try_append(&self, severity: Severity, payload: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let entry = JsonlEntry {
            id: Ulid::new().to_string(),
            ts: Local::now().to_rfc3339(),
            severity: severity.as_str(),
            payload,
        };
        let json = serde_json::to_string(&entry).map_err(std::io::Error::other)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{json}")
    }
}

impl RemoteClient for JsonlClient {
    fn log(&self, severity: Severity, payload: &str) {
        if self.try_append(severity, payload).is_err() {
            self.write_failures.fetch_add(1, Ordering::Relaxed);
        }
    }
}
