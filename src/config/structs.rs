//! Configuration struct definitions.

use serde::Deserialize;

/// Console sink configuration.
///
/// Carries a `file_name` field for shape-compatibility with [`FileConfig`]
/// even though the console sink has no file; the value is accepted and
/// ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Enable console output.
    pub enabled: bool,
    /// Accepted but unused.
    pub file_name: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            file_name: String::new(),
        }
    }
}

/// File sink configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Enable buffered file output.
    pub enabled: bool,
    /// Destination path for flushed log lines.
    pub file_name: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        // Platform state dir when available, a relative fallback otherwise.
        let file_name = directories::ProjectDirs::from("", "", "fanlog").map_or_else(
            || "fanlog.log".to_string(),
            |dirs| {
                dirs.state_dir()
                    .unwrap_or_else(|| dirs.data_dir())
                    .join("fanlog.log")
                    .to_string_lossy()
                    .into_owned()
            },
        );

        Self {
            enabled: false,
            file_name,
        }
    }
}
