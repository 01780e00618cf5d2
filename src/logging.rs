#![cfg(feature = "std")]

use std::env;
use std::io::Write;

use log::{self, LevelFilter, Metadata, Record};

/// Environment variable holding the default log level.
pub const LOG_ENV: &str = "BROADSIDE_LOG";

/// Writes to stderr so log lines never mix into the game transcript.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(std::io::stderr(), "{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Level from `BROADSIDE_LOG`, or `warn` if unset or unparsable.
pub fn env_level() -> LevelFilter {
    env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the logger. An explicit `level` wins over the environment.
/// Later calls only adjust the level.
pub fn init_logging(level: Option<LevelFilter>) {
    let level = level.unwrap_or_else(env_level);
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
