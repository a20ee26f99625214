#![cfg(feature = "std")]

//! Minimal stderr backend for the `log` facade.
//!
//! Stdout carries the board and prompts, so every record goes to stderr as
//! `[LEVEL target] message`.

use log::{LevelFilter, Log, Metadata, Record};
use std::io::Write;

/// Environment variable holding the log level (`off`, `error` .. `trace`).
pub const LOG_ENV: &str = "MULTICON_LOG";

const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut err = std::io::stderr().lock();
        // a closed stderr must not take the game down
        let _ = writeln!(err, "[{} {}] {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Level for a raw `MULTICON_LOG` value; unset or unparsable means `warn`.
fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(DEFAULT_LEVEL)
}

/// Install the stderr logger with the level from `MULTICON_LOG`.
/// Calling it again after a logger is installed does nothing.
pub fn init_logging() {
    let level = level_from(std::env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
