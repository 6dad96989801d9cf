//! Structured logging with a rotating file sink.
//!
//! Every module logs through `tracing` macros and spans. This module wires
//! those events to a `tracing-subscriber` formatter:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → RotatingFileWriter → log file
//! ```
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

pub mod file_writer;
pub mod init;

pub use file_writer::RotatingFileWriter;
pub use init::init_tracing;
