//! Routes records from the `log` crate facade through a [`Logger`].
//!
//! Libraries that log with `log::info!` / `log::warn!` / `log::error!` end up
//! on the same sink, under the same lock, in the same line format as direct
//! [`Logger::print`] calls. `debug!` and `trace!` have no matching level and
//! are filtered out.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::log::{log_level::LogLevel, logger::Logger};

/// Maps a `log` crate level onto ours; `None` for levels we do not emit.
#[must_use]
pub fn from_log_level(level: Level) -> Option<LogLevel> {
    match level {
        Level::Error => Some(LogLevel::Error),
        Level::Warn => Some(LogLevel::Warn),
        Level::Info => Some(LogLevel::Info),
        Level::Debug | Level::Trace => None,
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        from_log_level(metadata.level()).is_some()
    }

    fn log(&self, record: &Record<'_>) {
        if let Some(level) = from_log_level(record.level()) {
            self.print(level, &record.args().to_string());
        }
    }

    // every print already flushes
    fn flush(&self) {}
}

impl Logger {
    /// Registers the shared instance as the `log` crate's global logger.
    ///
    /// # Errors
    ///
    /// Returns [`SetLoggerError`] if some global logger was already installed.
    pub fn install_log_facade() -> Result<(), SetLoggerError> {
        log::set_logger(Logger::get_instance())?;
        log::set_max_level(LevelFilter::Info);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::memory_sink::MemorySink;
    use std::sync::Arc;

    #[test]
    fn maps_levels() {
        assert_eq!(from_log_level(Level::Error), Some(LogLevel::Error));
        assert_eq!(from_log_level(Level::Warn), Some(LogLevel::Warn));
        assert_eq!(from_log_level(Level::Info), Some(LogLevel::Info));
        assert_eq!(from_log_level(Level::Debug), None);
        assert_eq!(from_log_level(Level::Trace), None);
    }

    #[test]
    fn records_are_printed_in_line_format() {
        let logger = Logger::new();
        let sink = Arc::new(MemorySink::new());
        logger.set_output(Some(sink.clone()));

        logger.log(
            &Record::builder()
                .level(Level::Warn)
                .args(format_args!("cache miss for {}", "k1"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Debug)
                .args(format_args!("hidden"))
                .build(),
        );

        assert_eq!(sink.contents(), "WARN: cache miss for k1\n");
    }
}
