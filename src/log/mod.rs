pub mod log_bridge;
pub mod log_level;
pub mod log_macros;
pub mod log_sink;
pub mod logger;
pub mod memory_sink;
pub(crate) mod sink_registry;
pub mod std_stream_sink;
pub mod writer_sink;

pub use log_level::LogLevel;
pub use log_sink::{LogSink, SharedSink};
pub use logger::Logger;
pub use memory_sink::MemorySink;
pub use std_stream_sink::{StderrSink, StdoutSink};
pub use writer_sink::WriterSink;
