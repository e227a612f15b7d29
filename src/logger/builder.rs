//! Stepwise construction for loggers combining several sinks. The two
//! single-sink constructors on [`Log`] are wrappers over this.

use super::Log;
use crate::output::{ConsoleSink, FileSink, FlushDaemon};
use crate::remote::RemoteClient;
use std::path::PathBuf;
use std::sync::Arc;

/// Collects sink choices; nothing is started until [`build`](Self::build).
#[derive(Default)]
pub struct LogBuilder {
    console: bool,
    file_path: Option<PathBuf>,
    remote: Option<Arc<dyn RemoteClient>>,
}

impl LogBuilder {
    /// All sinks start disabled; a `Log` built without any enabled sink
    /// accepts calls and discards them.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable direct console output.
    #[must_use]
    pub const fn console(mut self) -> Self {
        self.console = true;
        self
    }

    /// Enable the buffered file sink, flushed to `path` once per second.
    #[must_use]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Attach an external structured-logging client. The handle is shared:
    /// the logger forwards entries to it but never closes it.
    #[must_use]
    pub fn remote(mut self, client: Arc<dyn RemoteClient>) -> Self {
        self.remote = Some(client);
        self
    }

    /// Builds the logger. When a file sink is present this also starts its
    /// background flush thread, which runs until the `Log` is dropped.
    #[must_use]
    pub fn build(self) -> Log {
        let console = self.console.then(ConsoleSink::new);

        let (file, flush_daemon) = match self.file_path {
            Some(path) => {
                let sink = Arc::new(FileSink::new(path));
                let daemon = FlushDaemon::start(Arc::clone(&sink));
                (Some(sink), Some(daemon))
            }
            None => (None, None),
        };

        Log {
            console,
            file,
            remote: self.remote,
            flush_daemon,
        }
    }
}
