//! External integrations
//!
//! Adapters isolate third-party services behind domain traits. The only
//! adapter in this crate is the external entity source; file ingestion and
//! output serialization belong to the surrounding service.

pub mod ner;
