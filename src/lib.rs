#![forbid(unsafe_code)]

//! `dailylog` - leveled file logging with daily rollover.
//!
//! Lines go to `<root>/<YYYY-MM-DD>.log` and the writer switches to a new
//! file at local midnight. Any number of threads can share one writer; each
//! call appends exactly one complete line.
//!
//! # Example
//!
//! ```no_run
//! use dailylog::{Level, LevelCode, RotatingWriter, log_info};
//!
//! let writer = RotatingWriter::new("/var/log/myapp")?;
//!
//! log_info!(writer, "listening on {}", 8080);
//! writer.log(Level::Warn, format_args!("slow request: {}ms", 1200));
//! writer.log(LevelCode(99), format_args!("written as UNKNOWN"));
//! # Ok::<(), dailylog::Error>(())
//! ```
//!
//! # Features
//!
//! - `cli` (default): Enables the `dailylog` binary

// Core modules (always available)
pub mod clock;
pub mod config;
pub mod error;
pub mod global;
pub mod internal;
pub mod level;
pub mod logger;
pub mod writer;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use clock::{Clock, ManualClock, SystemClock, next_rollover};
pub use config::Config;
pub use error::Error;
pub use level::{Level, LevelCode};
pub use logger::Logger;
pub use writer::{RetryPolicy, RotatingWriter, WriterBuilder};

/// Logs a formatted line at an explicit level (or raw [`LevelCode`]).
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.log($crate::LevelCode::from($level), format_args!($($arg)+))
    }};
}

/// Logs a formatted line at debug level.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.debug(format_args!($($arg)+))
    }};
}

/// Logs a formatted line at info level.
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.info(format_args!($($arg)+))
    }};
}

/// Logs a formatted line at warn level.
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.warn(format_args!($($arg)+))
    }};
}

/// Logs a formatted line at error level.
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.error(format_args!($($arg)+))
    }};
}
