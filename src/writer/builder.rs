//! Stepwise construction for [`RotatingWriter`]. The root is the only
//! required input, everything else has a default.

use super::{RetryPolicy, RotatingWriter};
use crate::clock::{Clock, SystemClock};
use crate::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

/// `rw-rw-rw-` before the process umask is applied.
pub const DEFAULT_FILE_MODE: u32 = 0o666;

pub struct WriterBuilder {
    root: PathBuf,
    file_mode: u32,
    retry: RetryPolicy,
    clock: Arc<dyn Clock>,
}

impl WriterBuilder {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            file_mode: DEFAULT_FILE_MODE,
            retry: RetryPolicy::default(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Unix permission bits for newly created log files. Ignored elsewhere.
    #[must_use]
    pub const fn file_mode(mut self, mode: u32) -> Self {
        self.file_mode = mode;
        self
    }

    #[must_use]
    pub const fn retry(mut self, policy: RetryPolicy) -> Self {
        self.retry = policy;
        self
    }

    /// Tests keep their own handle to the clock so they can move it across midnight.
    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Creates the root directory and opens today's file.
    ///
    /// # Errors
    /// [`Error::Directory`] or [`Error::FileOpen`]; no writer exists on failure.
    pub fn build(self) -> Result<RotatingWriter, Error> {
        RotatingWriter::open(self.root, self.file_mode, self.retry, self.clock)
    }
}
