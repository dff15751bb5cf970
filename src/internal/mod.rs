//! dailylog's own diagnostic channel, where rotation failures and swallowed
//! write errors go, since they can never be returned to the caller of `log`.
//!
//! Uses `OnceLock` so the channel is configured exactly once, even if
//! several entry points (CLI, config loader, tests) race to call `init`.
//! Until then every call is a silent no-op.

use crate::config::Config;
use crate::level::Level;
use crate::writer::TIMESTAMP_FORMAT;
use chrono::Local;
use std::io::Write;
use std::sync::OnceLock;

static DIAGNOSTICS: OnceLock<Diagnostics> = OnceLock::new();

#[derive(Debug, Clone, Copy)]
struct Diagnostics {
    enabled: bool,
}

/// First call wins; later calls are no-ops.
pub fn init(enabled: bool) {
    let was_init = DIAGNOSTICS.get().is_some();
    DIAGNOSTICS.get_or_init(|| Diagnostics { enabled });
    if !was_init {
        debug("INTERNAL", "Diagnostics ready");
    }
}

/// Preferred initializer, reuses the already-loaded config.
pub fn init_with_config(config: &Config) {
    init(config.general.diagnostics);
}

/// Whether diagnostics will actually be printed.
#[must_use]
pub fn enabled() -> bool {
    DIAGNOSTICS.get().is_some_and(|d| d.enabled)
}

/// Pre-init calls silently vanish rather than crashing, so it is safe during early startup.
fn log(level: Level, scope: &str, msg: &str) {
    if !enabled() {
        return;
    }
    let line = format!(
        "{} dailylog {}{scope}: {msg}\n",
        Local::now().format(TIMESTAMP_FORMAT),
        level.label(),
    );
    let _ = std::io::stderr().lock().write_all(line.as_bytes());
}

/// Rotations, file opens, and other state changes.
pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

/// Normal operational milestones: config loaded, writer installed.
pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

/// Recovered anomalies, such as a rotation that fell back to the previous file.
pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

/// Lost data: a line that could not be written at all.
pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
