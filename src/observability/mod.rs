//! Logging and span export.
//!
//! ```text
//! tracing macros ─┬─▶ fmt layer ──────────────────────────────▶ stderr
//!                 └─▶ tracing-opentelemetry ─▶ FileSpanExporter ─▶ OTLP JSON lines
//! ```
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! Span export is enabled by setting `trace_file`. The file rotates at 10 MiB and
//! keeps three backups (`<file>.1` … `<file>.3`).
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`exporter`]: OTLP JSON span exporter and tracer provider
//! - [`rotating`]: Rotating line writer

pub mod exporter;
pub mod init;
pub mod rotating;

pub use init::init_tracing;
