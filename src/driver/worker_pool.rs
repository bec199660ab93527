use std::{thread, time::Duration};

use rand::Rng;

use crate::{
    driver::{
        driver_error::DriverError, driver_settings::DriverSettings, thread_count::THREAD_LIMIT,
    },
    log::{log_level::LogLevel, logger::Logger},
};

/// Message printed by worker `index`.
#[must_use]
pub fn worker_message(index: usize) -> String {
    format!("this is the message n° {index}.")
}

/// Level assigned to worker `index`.
#[inline]
#[must_use]
pub const fn worker_level(index: usize) -> LogLevel {
    LogLevel::round_robin(index)
}

/// Body of a single worker: wait, then print one line.
fn worker_routine(logger: &Logger, index: usize, delay: Duration) {
    thread::sleep(delay);
    logger.print(worker_level(index), &worker_message(index));
}

fn pick_delay(settings: &DriverSettings) -> Duration {
    if settings.worker_jitter.is_zero() {
        return settings.worker_delay;
    }
    let jitter_ms = u64::try_from(settings.worker_jitter.as_millis()).unwrap_or(u64::MAX);
    settings.worker_delay + Duration::from_millis(rand::thread_rng().gen_range(0..=jitter_ms))
}

/// Spawns `count` workers that each print exactly once through `logger`,
/// then joins all of them.
///
/// Worker `i` is named `worker-<i>` and prints at
/// [`LogLevel::round_robin(i)`](LogLevel::round_robin). Output order across
/// workers is whatever the scheduler produces.
///
/// # Errors
///
/// * [`DriverError::OutOfRange`] if `count` exceeds `settings.max_threads` or
///   [`THREAD_LIMIT`]. Nothing is spawned.
/// * [`DriverError::WorkerSpawn`] if the OS refuses a thread. Workers already
///   started are still joined before returning.
/// * [`DriverError::WorkerPanicked`] for the first worker that panicked.
pub fn run_workers(
    logger: &Logger,
    count: usize,
    settings: &DriverSettings,
) -> Result<(), DriverError> {
    let limit = settings.max_threads.min(THREAD_LIMIT);
    if count > limit {
        return Err(DriverError::OutOfRange {
            arg: count.to_string(),
            max: limit,
        });
    }

    thread::scope(|scope| {
        let mut handles = Vec::new();
        let mut spawn_error = None;

        for index in 0..count {
            let delay = pick_delay(settings);
            let spawned = thread::Builder::new()
                .name(format!("worker-{index}"))
                .spawn_scoped(scope, move || worker_routine(logger, index, delay));
            match spawned {
                Ok(handle) => handles.push((index, handle)),
                Err(source) => {
                    spawn_error = Some(DriverError::WorkerSpawn { index, source });
                    break;
                }
            }
        }

        let mut panicked = None;
        for (index, handle) in handles {
            if handle.join().is_err() && panicked.is_none() {
                panicked = Some(DriverError::WorkerPanicked { index });
            }
        }

        match panicked.or(spawn_error) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    })
}
