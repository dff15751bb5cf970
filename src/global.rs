//! Process-wide default logger for code that can't easily thread a handle through.
//!
//! Installation is explicit: `main` builds a logger (usually a
//! [`RotatingWriter`](crate::RotatingWriter)) and calls [`install`] before
//! anything logs through this module. Calls made before that are dropped
//! silently, the same way internal diagnostics behave before init.

use crate::error::Error;
use crate::internal;
use crate::level::LevelCode;
use crate::logger::Logger;
use std::fmt;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Box<dyn Logger>> = OnceLock::new();

/// Makes `logger` the process-wide default.
///
/// # Errors
/// [`Error::AlreadyInstalled`] if a logger was installed earlier; the new
/// one is dropped and the old one stays in place.
pub fn install(logger: impl Logger + 'static) -> Result<&'static dyn Logger, Error> {
    GLOBAL.set(Box::new(logger)).map_err(|_| Error::AlreadyInstalled)?;
    internal::info("GLOBAL", "Installed process-wide logger");
    get().ok_or(Error::AlreadyInstalled)
}

#[must_use]
pub fn get() -> Option<&'static dyn Logger> {
    GLOBAL.get().map(|logger| &**logger)
}

/// Logs through the installed logger, or does nothing if none is installed yet.
pub fn log(level: impl Into<LevelCode>, args: fmt::Arguments<'_>) {
    if let Some(logger) = get() {
        logger.log(level.into(), args);
    }
}
