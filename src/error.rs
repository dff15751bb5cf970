//! Unified error type for all dailylog operations.
//!
//! Only construction, configuration, and explicit flush/close report errors.
//! Logging itself never does.

use std::path::PathBuf;

/// Error type for dailylog operations.
#[derive(Debug)]
pub enum Error {
    /// Log directory could not be created.
    Directory {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Dated log file could not be opened for append.
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },
    /// I/O error while flushing or closing.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// The process-wide writer was already installed.
    AlreadyInstalled,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Directory { path, source } => {
                write!(f, "make dir {} failed: {source}", path.display())
            }
            Self::FileOpen { path, source } => {
                write!(f, "open log file {} failed: {source}", path.display())
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::AlreadyInstalled => write!(f, "global writer already installed"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Directory { source, .. } | Self::FileOpen { source, .. } => Some(source),
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            Self::ConfigDirNotFound | Self::AlreadyInstalled => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
