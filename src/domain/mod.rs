//! Domain models and types for Veil.
//!
//! This module contains the core domain models, types, and business rules.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Entity types** ([`EntityType`]) - the closed set of PII categories
//! - **Match models** ([`PiiMatch`], [`ValueAnalysis`]) - detected spans and
//!   per-value analysis results
//! - **Filters** ([`EntityFilter`], [`DetectionOptions`]) - the per-call
//!   restriction of entity types
//! - **Error types** ([`VeilError`], [`EntitySourceError`])
//! - **Result type alias** ([`Result`])
//!
//! # Span convention
//!
//! All spans are half-open byte ranges `start..end` into the analyzed text.
//! A reconciled span set never contains two intersecting ranges and is
//! sorted by `start`:
//!
//! ```
//! use veil::domain::{DetectionSource, EntityType, PiiMatch};
//!
//! let a = PiiMatch::new(EntityType::NationalId, 0, 9, 0.9, "123456782", DetectionSource::Pattern);
//! let b = PiiMatch::new(EntityType::Phone, 14, 25, 0.9, "06-12345678", DetectionSource::Pattern);
//! assert!(!a.overlaps(&b));
//! ```

pub mod entity;
pub mod errors;
pub mod filter;
pub mod matches;
pub mod result;

// Re-export commonly used types for convenience
pub use entity::EntityType;
pub use errors::{EntitySourceError, VeilError};
pub use filter::{DetectionOptions, EntityFilter};
pub use matches::{DetectionSource, PiiMatch, ValueAnalysis};
pub use result::Result;
