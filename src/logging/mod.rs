//! Structured logging and observability
//!
//! Uses the `tracing` ecosystem: console output filtered via `RUST_LOG`,
//! plus an optional rotating JSON file sink.

pub mod structured;

pub use structured::{init_logging, LoggingGuard};
