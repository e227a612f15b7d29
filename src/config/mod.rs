//! TOML configuration loading.
//!
//! Separated from the struct definitions so the loading logic stays
//! independent of the serde schema. Discovery of a config file location is
//! the embedding application's concern; this module only parses what it is
//! handed.

mod structs;

pub use structs::{ConsoleConfig, FileConfig};

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A completely empty config file must still produce a working logger;
/// `#[serde(default)]` on every field ensures zero-config works.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Console output settings.
    pub console: ConsoleConfig,
    /// Buffered file output settings.
    pub file: FileConfig,
}

impl Config {
    /// Loads configuration from an explicit TOML file path.
    ///
    /// # Errors
    /// Fails when the file cannot be read or is not valid TOML.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }
}
