//! The public logging facade: a [`Logger`] trait with one plain and one
//! formatted method per severity, and the concrete [`Log`] that fans each
//! call out to whichever sinks are enabled.

mod builder;

pub use builder::LogBuilder;

use crate::config::{Config, ConsoleConfig, FileConfig};
use crate::fmt::Message;
use crate::output::{ConsoleSink, FileSink, FlushDaemon};
use crate::remote::RemoteClient;
use crate::severity::Severity;
use std::fmt;
use std::sync::Arc;

/// The polymorphic logging interface.
///
/// Implementations provide [`log`](Self::log); the fourteen severity methods
/// delegate to it. Plain variants concatenate their values with no
/// separator; `..f` variants take a bound format template
/// (`logger.warnf(format_args!("disk at {}%", 91))`, or the `log_warn!`
/// macro family). No method returns an error and every method is safe to
/// call from any number of threads at once.
pub trait Logger: Send + Sync {
    /// Core dispatch. Everything else is sugar over this.
    fn log(&self, severity: Severity, message: Message<'_>);

    fn trace(&self, args: &[&dyn fmt::Display]) {
        self.log(Severity::Trace, Message::Joined(args));
    }

    fn tracef(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Trace, Message::Formatted(args));
    }

    fn info(&self, args: &[&dyn fmt::Display]) {
        self.log(Severity::Info, Message::Joined(args));
    }

    fn infof(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Info, Message::Formatted(args));
    }

    fn notice(&self, args: &[&dyn fmt::Display]) {
        self.log(Severity::Notice, Message::Joined(args));
    }

    fn noticef(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Notice, Message::Formatted(args));
    }

    fn warn(&self, args: &[&dyn fmt::Display]) {
        self.log(Severity::Warn, Message::Joined(args));
    }

    fn warnf(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Warn, Message::Formatted(args));
    }

    fn error(&self, args: &[&dyn fmt::Display]) {
        self.log(Severity::Error, Message::Joined(args));
    }

    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Error, Message::Formatted(args));
    }

    fn alert(&self, args: &[&dyn fmt::Display]) {
        self.log(Severity::Alert, Message::Joined(args));
    }

    fn alertf(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Alert, Message::Formatted(args));
    }

    fn emergency(&self, args: &[&dyn fmt::Display]) {
        self.log(Severity::Emergency, Message::Joined(args));
    }

    fn emergencyf(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Emergency, Message::Formatted(args));
    }
}

/// Multi-sink logger. Sink presence is the enablement flag: a sink that was
/// never configured simply is not there to dispatch to.
///
/// Dropping a file-backed `Log` stops its flush thread; lines still buffered
/// at that point are lost, as they would be on process exit.
pub struct Log {
    console: Option<ConsoleSink>,
    file: Option<Arc<FileSink>>,
    remote: Option<Arc<dyn RemoteClient>>,
    // Held only for its Drop; the daemon and the dispatch path share the
    // sink through the Arc, never through this field.
    #[allow(dead_code)]
    flush_daemon: Option<FlushDaemon>,
}

impl Log {
    /// Stepwise construction for loggers combining several sinks.
    #[must_use]
    pub fn builder() -> LogBuilder {
        LogBuilder::new()
    }

    /// File-backed logger: buffered file sink enabled and its background
    /// flush thread already running.
    #[must_use]
    pub fn with_file(config: &FileConfig) -> Self {
        Self::builder().file(&config.file_name).build()
    }

    /// Console-backed logger. The config's fields are accepted but unused;
    /// the console sink needs no state beyond its lock.
    #[must_use]
    pub fn with_console(_config: &ConsoleConfig) -> Self {
        Self::builder().console().build()
    }

    /// Enables exactly the sinks the config flags as enabled. A remote
    /// client cannot come from config (it is a live handle); attach it via
    /// [`builder`](Self::builder).
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut builder = Self::builder();
        if config.console.enabled {
            builder = builder.console();
        }
        if config.file.enabled {
            builder = builder.file(&config.file.file_name);
        }
        builder.build()
    }

    /// Forces one file-flush cycle instead of waiting for the background
    /// thread's next tick. Useful before orderly shutdown and in tests.
    ///
    /// # Errors
    /// The file write error, when one occurred. The buffer is cleared either
    /// way.
    pub fn flush(&self) -> Result<(), crate::Error> {
        if let Some(file) = &self.file {
            file.flush()?;
        }
        Ok(())
    }

    #[must_use]
    pub const fn console_enabled(&self) -> bool {
        self.console.is_some()
    }

    #[must_use]
    pub const fn file_enabled(&self) -> bool {
        self.file.is_some()
    }

    #[must_use]
    pub const fn remote_enabled(&self) -> bool {
        self.remote.is_some()
    }

    /// Bytes waiting for the next flush cycle; zero without a file sink.
    #[must_use]
    pub fn buffered_len(&self) -> usize {
        self.file.as_ref().map_or(0, |file| file.buffered_len())
    }

    /// Flush cycles whose file write failed and whose lines were dropped.
    #[must_use]
    pub fn flush_failures(&self) -> u64 {
        self.file.as_ref().map_or(0, |file| file.flush_failures())
    }
}

impl Logger for Log {
    /// For one call the sink order is fixed: remote, then console, then
    /// file. Each sink is dispatched independently under its own lock; no
    /// ordering holds across concurrent calls beyond what those locks give.
    fn log(&self, severity: Severity, message: Message<'_>) {
        if let Some(remote) = &self.remote {
            // Remote backends frame entries themselves, so they get the bare
            // payload without tag or timestamp.
            remote.log(severity, &message.render());
        }

        if let Some(console) = &self.console {
            console.write(severity, &message);
        }

        if let Some(file) = &self.file {
            file.append(severity, &message);
        }
    }
}
