//! Exercises the shared logger under concurrent load: parses a thread count,
//! starts that many workers, and reports failures through the logger itself.

pub mod driver_error;
pub mod driver_settings;
pub mod thread_count;
pub mod worker_pool;

pub use driver_error::DriverError;
pub use driver_settings::{DriverSettings, OutputTarget};
pub use thread_count::{MAX_NB_THREADS, THREAD_LIMIT, parse_thread_count};
pub use worker_pool::run_workers;

use crate::log::logger::Logger;

/// Parses `arg` and runs that many workers against `logger`.
///
/// `on_start` receives the parsed count once parsing succeeded, before any
/// worker is spawned. Returns the number of workers that ran.
pub fn run(
    logger: &Logger,
    arg: Option<&str>,
    settings: &DriverSettings,
    on_start: impl FnOnce(usize),
) -> Result<usize, DriverError> {
    let count = parse_thread_count(arg, settings.max_threads.min(THREAD_LIMIT))?;
    on_start(count);
    run_workers(logger, count, settings)?;
    Ok(count)
}

/// Writes `err` to `logger` at ERROR level.
///
/// Failures outside the recognized set are reported as `Unknown error.`;
/// the caller is expected to abort after that.
pub fn report(logger: &Logger, err: &DriverError) {
    match err {
        DriverError::MissingArgument
        | DriverError::InvalidNumber { .. }
        | DriverError::OutOfRange { .. }
        | DriverError::WorkerSpawn { .. } => crate::logger_error!(logger, "{err}"),
        DriverError::WorkerPanicked { .. } => crate::logger_error!(logger, "Unknown error."),
    }
}
