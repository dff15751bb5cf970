//! The rotating file writer: one open file per calendar day, swapped at local
//! midnight, with every check-rotate-write sequence serialized by a mutex.

mod builder;

pub use builder::{DEFAULT_FILE_MODE, WriterBuilder};

use crate::clock::{self, Clock};
use crate::error::Error;
use crate::internal;
use crate::level::LevelCode;
use crate::logger::Logger;
use chrono::{DateTime, Local};
use serde::Deserialize;
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// `2006/01/02 15:04:05` style, second precision, locale independent.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Log files are named after the local date they were opened on.
pub const FILE_DATE_FORMAT: &str = "%Y-%m-%d";

/// What to do after a rotation fails to open the new day's file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetryPolicy {
    /// Keep trying on every subsequent call until the open succeeds.
    #[default]
    EveryCall,
    /// Give up until the next rollover instant has passed. A single transient
    /// failure can leave lines going to the stale file for up to two days.
    NextBoundary,
}

/// Everything that changes at rotation; only touched with the lock held.
struct RotationState {
    file: File,
    path: PathBuf,
    next_rollover: DateTime<Local>,
    retry_pending: bool,
}

/// Appends leveled, timestamped lines to `<root>/<YYYY-MM-DD>.log`, rolling
/// over to a new file at local midnight.
///
/// Safe to share between threads; calls to [`log`](Self::log) are serialized
/// so lines never interleave and rotation happens at most once per boundary.
/// Logging never fails from the caller's point of view: if the next day's file
/// cannot be opened, lines keep going to the current one.
pub struct RotatingWriter {
    root: PathBuf,
    file_mode: u32,
    retry: RetryPolicy,
    clock: Arc<dyn Clock>,
    state: Mutex<RotationState>,
}

impl RotatingWriter {
    /// Writer rooted at `root` with the wall clock and default options.
    ///
    /// # Errors
    /// [`Error::Directory`] if `root` cannot be created, [`Error::FileOpen`] if
    /// today's file cannot be opened.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, Error> {
        WriterBuilder::new(root).build()
    }

    #[must_use]
    pub fn builder(root: impl Into<PathBuf>) -> WriterBuilder {
        WriterBuilder::new(root)
    }

    /// Nothing is kept around on failure: either a fully open writer or an error.
    fn open(
        root: PathBuf,
        file_mode: u32,
        retry: RetryPolicy,
        time_source: Arc<dyn Clock>,
    ) -> Result<Self, Error> {
        if let Err(source) = fs::create_dir_all(&root) {
            internal::error(
                "WRITER",
                &format!("Failed to create directory {}: {source}", root.display()),
            );
            return Err(Error::Directory { path: root, source });
        }

        let now = time_source.now();
        let path = dated_path(&root, &now);
        let file = open_append(&path, file_mode).map_err(|source| Error::FileOpen {
            path: path.clone(),
            source,
        })?;
        internal::debug("WRITER", &format!("Opened {}", path.display()));

        Ok(Self {
            root,
            file_mode,
            retry,
            state: Mutex::new(RotationState {
                file,
                path,
                next_rollover: clock::next_rollover(&now),
                retry_pending: false,
            }),
            clock: time_source,
        })
    }

    /// Appends one line for `level`. Accepts a [`Level`](crate::Level) or a raw
    /// [`LevelCode`]; unknown codes are labelled `UNKNOWN`.
    pub fn log(&self, level: impl Into<LevelCode>, args: fmt::Arguments<'_>) {
        let code: LevelCode = level.into();
        let label = code.label();
        // Formatting happens outside the lock so a panicking Display impl
        // can't poison it.
        let message = fmt::format(args);

        let mut state = self.lock();
        let now = self.clock.now();
        self.rotate_if_due(&mut state, &now);

        let line = format_line(&now, label, &message);
        if let Err(e) = state.file.write_all(line.as_bytes()) {
            internal::error(
                "WRITER",
                &format!("Dropped line for {}: {e}", state.path.display()),
            );
        }
    }

    /// Swaps in today's file once `now` has reached the stored rollover
    /// instant, or while an earlier failed rotation is waiting to be retried.
    fn rotate_if_due(&self, state: &mut RotationState, now: &DateTime<Local>) {
        let due = *now >= state.next_rollover;
        if !due && !state.retry_pending {
            return;
        }
        if due {
            state.next_rollover = clock::next_rollover(now);
        }

        let path = dated_path(&self.root, now);
        match open_append(&path, self.file_mode) {
            Ok(file) => {
                let previous = std::mem::replace(&mut state.file, file);
                drop(previous);
                internal::debug(
                    "ROTATE",
                    &format!("{} -> {}", state.path.display(), path.display()),
                );
                state.path = path;
                state.retry_pending = false;
            }
            Err(e) => {
                state.retry_pending = self.retry == RetryPolicy::EveryCall;
                internal::warn(
                    "ROTATE",
                    &format!(
                        "Cannot open {} ({e}), still writing to {}",
                        path.display(),
                        state.path.display()
                    ),
                );
            }
        }
    }

    /// A panic inside another caller's critical section must not take logging down with it.
    fn lock(&self) -> MutexGuard<'_, RotationState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File currently receiving lines.
    #[must_use]
    pub fn current_path(&self) -> PathBuf {
        self.lock().path.clone()
    }

    /// Instant at or after which the next call will rotate.
    #[must_use]
    pub fn next_rollover(&self) -> DateTime<Local> {
        self.lock().next_rollover
    }

    #[must_use]
    pub const fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// # Errors
    /// I/O errors from the underlying file.
    pub fn flush(&self) -> Result<(), Error> {
        self.lock().file.flush()?;
        Ok(())
    }

    /// Syncs the current file to disk and releases it. Dropping the writer
    /// also releases the file, just without the sync.
    ///
    /// # Errors
    /// I/O errors from the final sync.
    pub fn close(self) -> Result<(), Error> {
        let state = self
            .state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        state.file.sync_all()?;
        internal::debug("WRITER", &format!("Closed {}", state.path.display()));
        Ok(())
    }
}

impl Logger for RotatingWriter {
    fn log(&self, level: LevelCode, args: fmt::Arguments<'_>) {
        Self::log(self, level, args);
    }

    fn flush(&self) -> Result<(), Error> {
        Self::flush(self)
    }
}

impl fmt::Debug for RotatingWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RotatingWriter")
            .field("root", &self.root)
            .field("file_mode", &format_args!("{:o}", self.file_mode))
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

fn dated_path(root: &Path, now: &DateTime<Local>) -> PathBuf {
    root.join(format!("{}.log", now.format(FILE_DATE_FORMAT)))
}

/// `<timestamp> <LABEL><message>`, newline-terminated exactly once.
fn format_line(now: &DateTime<Local>, label: &str, message: &str) -> String {
    let mut line = format!("{} {label}{message}", now.format(TIMESTAMP_FORMAT));
    if !line.ends_with('\n') {
        line.push('\n');
    }
    line
}

fn open_append(path: &Path, file_mode: u32) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(file_mode);
    }
    #[cfg(not(unix))]
    let _ = file_mode;
    options.open(path)
}
