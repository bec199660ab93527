use crate::log::{
    log_level::LogLevel,
    log_sink::SharedSink,
    sink_registry::SinkRegistry,
};

use std::sync::OnceLock;

static INSTANCE: OnceLock<Logger> = OnceLock::new();

/// Process-wide, synchronous, leveled logger.
///
/// Every line has the shape `"<LEVEL>: <message>\n"` and is written to the
/// sink currently installed in the logger's registry. Nothing is
/// written until a sink is set.
///
/// # Architecture
///
/// 1. **Accessor**: [`Logger::get_instance`] lazily builds the one shared
///    logger on first use (exactly once, even under concurrent first calls).
/// 2. **Registry**: holds the current sink behind a single mutex.
/// 3. **Writers**: any thread calls [`Logger::print`]; the mutex is held for
///    the whole write + flush, so lines never interleave.
///
/// There is no queue and no background thread: when `print` returns, the
/// line has been flushed to the sink (or dropped because none was set).
///
/// The shared instance is the only logger outside this crate, and the sink
/// is only reachable through [`Logger::print`]:
///
/// ```compile_fail
/// let second = singleton_logger::log::Logger::new();
/// ```
///
/// ```compile_fail
/// use singleton_logger::log::Logger;
/// Logger::get_instance().registry().with_output(|s| s.write_line("raw"));
/// ```
#[derive(Debug)]
pub struct Logger {
    registry: SinkRegistry,
}

impl Logger {
    /// Creates a logger with no sink. Only the shared instance and this
    /// crate's tests build one.
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self {
            registry: SinkRegistry::new(),
        }
    }

    /// Returns the process-wide logger, creating it on first call.
    #[must_use]
    pub fn get_instance() -> &'static Logger {
        INSTANCE.get_or_init(Logger::new)
    }

    /// Installs the destination for every following line.
    ///
    /// `None` discards all lines until a sink is set again. The caller keeps
    /// its own handle on the sink; the logger keeps its clone alive while the
    /// sink stays installed.
    pub fn set_output(&self, sink: Option<SharedSink>) {
        self.registry.set_output(sink);
    }

    /// Like [`set_output`](Self::set_output), but hands back the sink that was
    /// installed before so it can be restored later.
    pub fn replace_output(&self, sink: Option<SharedSink>) -> Option<SharedSink> {
        self.registry.replace(sink)
    }

    /// Whether lines are currently written anywhere.
    #[must_use]
    pub fn has_output(&self) -> bool {
        self.registry.has_output()
    }

    /// Writes `"<LEVEL>: <message>\n"` to the current sink and flushes it.
    ///
    /// Silently does nothing when no sink is set. Sink I/O errors are
    /// swallowed: logging never fails the caller.
    pub fn print(&self, level: LogLevel, message: &str) {
        // Format outside the lock to keep the critical section to the write itself.
        let line = format_line(level, message);
        let _ = self.registry.with_output(|sink| sink.write_line(&line));
    }

    #[inline]
    pub fn info(&self, message: &str) {
        self.print(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: &str) {
        self.print(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: &str) {
        self.print(LogLevel::Error, message);
    }
}

/// `"<LEVEL>: <message>"`, without terminator.
#[must_use]
pub fn format_line(level: LogLevel, message: &str) -> String {
    let mut line = String::with_capacity(level.as_str().len() + 2 + message.len());
    line.push_str(level.as_str());
    line.push_str(": ");
    line.push_str(message);
    line
}
