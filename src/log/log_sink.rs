use std::{
    io::{self, Write},
    sync::Arc,
};

/// A destination for formatted log lines.
///
/// The logger holds the sink behind its own lock, so implementations are
/// never asked to write two lines at the same time through the logger.
/// `write_line` receives the line without its terminator; implementations
/// append `\n`, emit the whole line in a single write, and flush before
/// returning.
pub trait LogSink: Send + Sync {
    fn write_line(&self, line: &str) -> io::Result<()>;
}

/// Shared handle to a sink.
///
/// Whoever installs a sink keeps its own clone; the logger's clone keeps the
/// sink alive for as long as it stays installed.
pub type SharedSink = Arc<dyn LogSink>;

/// Writes `line` plus its terminator to `out` as one buffer and flushes.
pub(crate) fn write_terminated<W: Write + ?Sized>(out: &mut W, line: &str) -> io::Result<()> {
    let mut buf = Vec::with_capacity(line.len() + 1);
    buf.extend_from_slice(line.as_bytes());
    buf.push(b'\n');
    out.write_all(&buf)?;
    out.flush()
}
