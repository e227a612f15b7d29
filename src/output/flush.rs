//! Background flush daemon for the file sink.
//!
//! One daemon runs per file-backed logger, draining the shared buffer once
//! per second for as long as the logger lives. Dropping the daemon signals
//! the thread and joins it, so tests and short-lived processes do not leak
//! a detached thread.

use crate::output::FileSink;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Fixed flush period. Not configurable; callers needing an immediate drain
/// use `Log::flush`.
const FLUSH_INTERVAL: Duration = Duration::from_secs(1);

/// Handle to the background flush thread. Owned by the logger that started
/// it; there is exactly one per file-backed logger.
#[derive(Debug)]
pub(crate) struct FlushDaemon {
    thread_handle: Option<JoinHandle<()>>,
    shutdown: Arc<AtomicBool>,
}

impl FlushDaemon {
    /// Spawns the flush thread. It wakes once per interval, checks for
    /// shutdown, and drains the sink's buffer, ignoring write failures (the
    /// sink counts them).
    pub(crate) fn start(sink: Arc<FileSink>) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_flag = Arc::clone(&shutdown);

        let thread_handle = thread::Builder::new()
            .name("file-flush".to_string())
            .spawn(move || {
                Self::run_loop(&sink, &shutdown_flag);
            })
            .expect("failed to spawn file flush thread");

        Self {
            thread_handle: Some(thread_handle),
            shutdown,
        }
    }

    fn run_loop(sink: &Arc<FileSink>, shutdown: &Arc<AtomicBool>) {
        loop {
            thread::sleep(FLUSH_INTERVAL);

            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            // No final drain on shutdown: lines still buffered when the
            // logger is dropped are lost, same as on process exit.
            let _ = sink.flush();
        }
    }

    /// Non-blocking shutdown signal. The thread exits at its next wakeup.
    pub(crate) fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }
}

impl Drop for FlushDaemon {
    fn drop(&mut self) {
        self.shutdown();
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}
