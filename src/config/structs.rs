//! Configuration struct definitions.

use crate::writer::{DEFAULT_FILE_MODE, RetryPolicy};
use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Print dailylog's own diagnostics (rotation failures, dropped lines) to stderr.
    pub diagnostics: bool,
}

/// File output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Directory the dated files go into. `~` is expanded.
    pub root: String,
    /// Unix permission bits for new files (e.g. `0o644`).
    pub file_mode: u32,
    /// Behaviour after a failed rotation.
    pub retry: RetryPolicy,
}

impl Default for FileConfig {
    fn default() -> Self {
        let root = directories::ProjectDirs::from("", "", "dailylog").map_or_else(
            || "logs".to_string(),
            |dirs| {
                dirs.state_dir()
                    .unwrap_or_else(|| dirs.data_dir())
                    .join("logs")
                    .to_string_lossy()
                    .into_owned()
            },
        );

        Self {
            root,
            file_mode: DEFAULT_FILE_MODE,
            retry: RetryPolicy::default(),
        }
    }
}
