//! A process-wide, thread-safe logger and a small driver that hammers it from
//! many threads at once.
//!
//! The crate provides one binary:
//! - `singleton-logger`: takes a thread count, starts that many workers, and
//!   has each of them print one leveled line through the shared logger.
//!
//! ```no_run
//! use std::sync::Arc;
//! use singleton_logger::log::{LogLevel, Logger, StderrSink};
//!
//! Logger::get_instance().set_output(Some(Arc::new(StderrSink)));
//! Logger::get_instance().print(LogLevel::Warn, "low disk space");
//! // stderr: "WARN: low disk space\n"
//! ```

/// Handles configuration loading.
pub mod config;
/// Thread-count parsing and the concurrent worker pool.
pub mod driver;
/// The shared logger, its sink registry, levels, and stock sinks.
pub mod log;
