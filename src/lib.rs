#![forbid(unsafe_code)]

//! `fanlog` - multi-sink leveled logging.
//!
//! Routes each log call, independently and unconditionally, to every enabled
//! destination behind one [`Logger`] trait:
//! - a console sink writing each line synchronously to standard output
//! - a buffered file sink whose in-memory buffer a background thread drains
//!   to disk once per second
//! - a remote structured-logging backend supplied by the caller as a
//!   [`RemoteClient`]
//!
//! Logging calls never return errors and never require external
//! synchronization; delivery is best-effort by design.
//!
//! # Example
//!
//! ```
//! use fanlog::{Log, Logger};
//!
//! let log = Log::builder().console().build();
//!
//! log.info(&[&"listener started on port ", &8080]);
//! fanlog::log_warn!(log, "disk at {}%", 91);
//! ```

pub mod config;
mod error;
pub mod fmt;
pub mod logger;
mod macros;
mod nop;
pub mod output;
pub mod remote;
pub mod severity;

// Re-exports for convenience
pub use config::{Config, ConsoleConfig, FileConfig};
pub use error::Error;
pub use fmt::{Message, format_timestamp};
pub use logger::{Log, LogBuilder, Logger};
pub use nop::NopLogger;
pub use output::{ConsoleSink, FileSink};
pub use remote::{JsonlClient, MemoryClient, RemoteClient};
pub use severity::{ParseSeverityError, Severity};
