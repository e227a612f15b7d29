//! The two locally-written destinations: direct console output and the
//! buffered file sink with its background flush daemon. The remote
//! destination lives in [`crate::remote`] since its transport is supplied by
//! the caller.

mod console;
mod file;
mod flush;

pub use console::ConsoleSink;
pub use file::FileSink;
pub(crate) use flush::FlushDaemon;
