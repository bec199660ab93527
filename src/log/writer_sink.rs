use std::{
    io::{self, Write},
    sync::{Mutex, PoisonError},
};

use crate::log::log_sink::{LogSink, write_terminated};

/// Adapts any `Write` implementation (a `TcpStream`, a pipe, a `Vec<u8>`,
/// ...) into a [`LogSink`].
#[derive(Debug)]
pub struct WriterSink<W> {
    inner: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: Mutex::new(writer),
        }
    }

    /// Consumes the sink and hands the writer back.
    pub fn into_inner(self) -> W {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with shared access to the wrapped writer.
    pub fn with_inner<R>(&self, f: impl FnOnce(&W) -> R) -> R {
        let guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }
}

impl<W: Write + Send> LogSink for WriterSink<W> {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut out = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        write_terminated(&mut *out, line)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn forwards_lines_to_the_wrapped_writer() {
        let sink = WriterSink::new(Vec::<u8>::new());
        sink.write_line("INFO: first").unwrap();
        sink.write_line("WARN: second").unwrap();

        assert_eq!(sink.with_inner(Vec::len), 25);
        assert_eq!(sink.into_inner(), b"INFO: first\nWARN: second\n");
    }

    #[test]
    fn reports_writer_errors() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let sink = WriterSink::new(Broken);
        let err = sink.write_line("ERROR: lost").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
