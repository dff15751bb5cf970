//! Severity levels and the fixed labels written in front of every log line.

use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so callers can compare severities; order follows declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Startup, teardown, and state-change details useful for diagnosing issues.
    Debug = 0,
    /// Normal operational milestones.
    #[default]
    Info = 1,
    /// Non-fatal anomalies that may need attention.
    Warn = 2,
    /// Failures that prevent an operation from completing.
    Error = 3,
}

/// Written for any severity code outside the known set.
pub const UNKNOWN_LABEL: &str = "UNKNOWN ";

impl Level {
    /// Label with trailing space, as written in the file.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG ",
            Self::Info => "INFO ",
            Self::Warn => "WARN ",
            Self::Error => "ERROR ",
        }
    }

    /// Lowercase name, as accepted on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Maps a raw severity code back to a level; `None` for anything out of range.
    #[must_use]
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::Debug),
            1 => Some(Self::Info),
            2 => Some(Self::Warn),
            3 => Some(Self::Error),
            _ => None,
        }
    }

    /// Convenience for iteration in help output and tests.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Debug, Self::Info, Self::Warn, Self::Error]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw severity code as handed over by callers that only deal in integers
/// (FFI shims, wire formats, older call sites).
///
/// Unlike [`Level`], a code can hold values outside the known set; those
/// render as [`UNKNOWN_LABEL`] instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LevelCode(pub u32);

impl LevelCode {
    #[must_use]
    pub const fn level(self) -> Option<Level> {
        Level::from_code(self.0)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self.level() {
            Some(level) => level.label(),
            None => UNKNOWN_LABEL,
        }
    }
}

impl From<Level> for LevelCode {
    fn from(level: Level) -> Self {
        Self(level as u32)
    }
}

impl From<u32> for LevelCode {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "err" => Ok(Self::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
