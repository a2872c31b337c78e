//! Audit logging for redaction operations
//!
//! Records what was redacted (hashed, never plaintext) for compliance
//! review.

pub mod logger;

pub use logger::AuditLogger;
