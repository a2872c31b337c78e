//! Redaction module
//!
//! Maps entity types to fixed redaction tokens and rewrites text values by
//! replacing reconciled spans with those tokens.

pub mod labels;
pub mod redactor;

pub use labels::{token_for, GENERIC_TOKEN};
pub use redactor::redact_spans;
