//! The interface callers log through, so code can depend on "something that
//! logs" instead of on the rotating file writer itself.

use crate::error::Error;
use crate::level::{Level, LevelCode};
use std::fmt;
use std::sync::Arc;

/// `Send + Sync` so one logger can be shared by every thread in the process.
pub trait Logger: Send + Sync {
    /// Writes one line. Never fails from the caller's point of view.
    fn log(&self, level: LevelCode, args: fmt::Arguments<'_>);

    /// Pushes out anything the implementation holds back.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), Error> {
        Ok(())
    }

    fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug.into(), args);
    }

    fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info.into(), args);
    }

    fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warn.into(), args);
    }

    fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error.into(), args);
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn log(&self, level: LevelCode, args: fmt::Arguments<'_>) {
        (**self).log(level, args);
    }

    fn flush(&self) -> Result<(), Error> {
        (**self).flush()
    }
}
