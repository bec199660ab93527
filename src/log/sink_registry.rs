use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::log::log_sink::{LogSink, SharedSink};

/// Holds the one current output sink and the lock that guards it.
///
/// The same lock serializes sink swaps and writes: a writer that acquired it
/// finishes its line on the sink it saw at acquisition, and a swap becomes
/// visible to every writer that acquires the lock after it.
#[derive(Default)]
pub struct SinkRegistry {
    output: Mutex<Option<SharedSink>>,
}

impl SinkRegistry {
    /// Creates a registry with no sink installed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            output: Mutex::new(None),
        }
    }

    // A panic inside a sink must not disable logging for everyone else.
    fn output(&self) -> MutexGuard<'_, Option<SharedSink>> {
        self.output.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Installs `sink`, or discards all future lines when `None`.
    pub fn set_output(&self, sink: Option<SharedSink>) {
        *self.output() = sink;
    }

    /// Like [`set_output`](Self::set_output), but hands back the sink that was
    /// installed before.
    pub fn replace(&self, sink: Option<SharedSink>) -> Option<SharedSink> {
        std::mem::replace(&mut *self.output(), sink)
    }

    #[must_use]
    pub fn has_output(&self) -> bool {
        self.output().is_some()
    }

    /// Runs `f` against the current sink while holding the lock.
    ///
    /// Returns `None` without calling `f` when no sink is installed.
    pub fn with_output<R>(&self, f: impl FnOnce(&dyn LogSink) -> R) -> Option<R> {
        let guard = self.output();
        guard.as_deref().map(|sink| f(sink))
    }
}

impl std::fmt::Debug for SinkRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SinkRegistry")
            .field("has_output", &self.has_output())
            .finish()
    }
}
