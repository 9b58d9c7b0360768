//! Tracing with span export to a local JSON-lines file.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → FileSpanExporter → RotatingWriter
//! ```
//!
//! The export file rotates at 10 MB and keeps three backups. The filter level
//! is taken from [`Config::trace_level`](crate::Config::trace_level).
//!
//! - [`init_tracing`]: installs the subscriber
//! - `tracer`: provider and span exporter
//! - `file_writer`: size-rotated file output

mod file_writer;
mod init;
mod tracer;

pub use init::{init_tracing, SPAN_FILE_NAME};
