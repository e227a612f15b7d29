//! Severity levels and their fixed display tags.

use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so callers can compare criticality, even though the logger
/// itself routes every severity to every enabled sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    /// High-volume instrumentation, too noisy outside of development.
    Trace = 0,
    /// Normal operational milestones: connection established, config loaded, etc.
    #[default]
    Info = 1,
    /// Significant but expected events worth keeping out of the Info stream.
    Notice = 2,
    /// Non-fatal anomalies that may need attention.
    Warn = 3,
    /// Failures that prevent an operation from completing.
    Error = 4,
    /// Conditions requiring immediate operator action.
    Alert = 5,
    /// The process is unusable.
    Emergency = 6,
}

impl Severity {
    /// Fixed bracketed tag, including the trailing space that separates it
    /// from the timestamp in a rendered line. The mapping is total and
    /// immutable for the process lifetime; the closed enum leaves no
    /// unmapped case.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Trace => "[TRACE] ",
            Self::Info => "[INFO] ",
            Self::Notice => "[NOTICE] ",
            Self::Warn => "[WARN] ",
            Self::Error => "[ERROR] ",
            Self::Alert => "[ALERT] ",
            Self::Emergency => "[EMERGENCY] ",
        }
    }

    /// Lowercase because config files use lowercase severity strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Info => "info",
            Self::Notice => "notice",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Alert => "alert",
            Self::Emergency => "emergency",
        }
    }

    /// Convenience for iteration, used by tests and diagnostics.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Trace,
            Self::Info,
            Self::Notice,
            Self::Warn,
            Self::Error,
            Self::Alert,
            Self::Emergency,
        ]
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown severity" from
/// other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError(String);

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown severity: '{}'", self.0)
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            // Backends that lack a Trace level conventionally map it to Debug,
            // so both names parse to the same variant.
            "trace" | "debug" => Ok(Self::Trace),
            "info" => Ok(Self::Info),
            "notice" => Ok(Self::Notice),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "err" => Ok(Self::Error),
            "alert" => Ok(Self::Alert),
            "emergency" => Ok(Self::Emergency),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}
