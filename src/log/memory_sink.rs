use std::{
    io,
    sync::{Mutex, MutexGuard, PoisonError},
};

use crate::log::log_sink::{LogSink, write_terminated};

/// In-memory sink that captures every line written to it.
///
/// Meant for tests and for embedders that want to inspect the log after the
/// fact. Keep an `Arc<MemorySink>` around, install a clone, then read the
/// captured text with [`contents`](Self::contents) or [`lines`](Self::lines).
#[derive(Debug, Default)]
pub struct MemorySink {
    buf: Mutex<Vec<u8>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn buf(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buf.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Everything written so far, terminators included.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf()).into_owned()
    }

    /// Captured lines without their terminators.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Number of bytes captured.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf().is_empty()
    }

    pub fn clear(&self) {
        self.buf().clear();
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        write_terminated(&mut *self.buf(), line)
    }
}
