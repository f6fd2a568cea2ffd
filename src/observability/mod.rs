//! OpenTelemetry-based tracing with file export.
//!
//! Engine and handler spans are exported as OTLP JSON lines to a local file,
//! so navigation decisions can be inspected offline without a collector.
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → JsonFileExporter → rotating file
//! ```
//!
//! # Configuration
//!
//! - `trace_level`: filter directive (falls back to `RUST_LOG`, then `info`)
//! - `trace_file`: output path (default `~/.local/share/keynav/keynav-otlp.json`)
//!
//! Files rotate at 10 MB and the three newest backups are kept.
//!
//! # Modules
//!
//! - [`init`]: subscriber installation
//! - [`tracer`]: tracer provider and exporter
//! - [`span_formatter`]: OTLP JSON encoding
//! - [`file_writer`]: size-rotated output file

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;
