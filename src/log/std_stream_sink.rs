use std::io;

use crate::log::log_sink::{LogSink, write_terminated};

/// Sink for the process standard error stream.
///
/// Lets operators capture the log with shell redirection (`2> run.log`)
/// while regular program output stays on stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl LogSink for StderrSink {
    #[inline]
    fn write_line(&self, line: &str) -> io::Result<()> {
        write_terminated(&mut io::stderr().lock(), line)
    }
}

/// Sink for the process standard output stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    #[inline]
    fn write_line(&self, line: &str) -> io::Result<()> {
        write_terminated(&mut io::stdout().lock(), line)
    }
}
