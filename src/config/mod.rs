//! TOML configuration loading.
//!
//! Separated from struct definitions so that the loading logic (file lookup,
//! path expansion) stays independent of the serde schema.

mod structs;

pub use structs::{FileConfig, GeneralConfig};

use crate::internal;
use crate::writer::RotatingWriter;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A completely empty config file must still produce a working writer; `#[serde(default)]`
/// on every field ensures zero-config works out of the box.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Settings about dailylog itself rather than the files it writes.
    pub general: GeneralConfig,
    /// Where and how log files are written.
    pub file: FileConfig,
}

impl Config {
    /// Loads the user's config from the default location, falling back to
    /// defaults when there is no file.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        internal::debug("CONFIG", "Loading config from default location");
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path instead of the default location.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        internal::info("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// # Errors
    /// TOML syntax or type errors.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config dir>/dailylog/config.toml`, e.g. `~/.config/dailylog/config.toml` on Linux.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("dailylog").join("config.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Log root with `~` expanded to the user's home directory.
    #[must_use]
    pub fn root_dir(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.file.root).into_owned())
    }

    /// Builds a writer from the file section.
    ///
    /// # Errors
    /// See [`RotatingWriter::new`].
    pub fn writer(&self) -> Result<RotatingWriter, crate::Error> {
        RotatingWriter::builder(self.root_dir())
            .file_mode(self.file.file_mode)
            .retry(self.file.retry)
            .build()
    }
}
