// Veil - PII Detection and Redaction Engine
// Copyright (c) 2025 Veil Contributors
// Licensed under the MIT License

//! # Veil — PII detection and redaction
//!
//! Veil locates and redacts personally identifiable information inside free
//! text and tabular cell values. Detection combines deterministic pattern
//! rules (regex recognizers with checksum validation and context boosting)
//! with the output of an external statistical named-entity recognizer;
//! overlapping detections are reconciled into a single non-overlapping span
//! set, and redaction replaces each retained span with a stable category
//! label.
//!
//! ## Architecture
//!
//! Veil follows a layered architecture:
//!
//! - [`analysis`] - recognizer catalogue, validators, context scoring,
//!   reconciliation, and the analysis engine
//! - [`redaction`] - label mapping and span replacement
//! - [`adapters`] - the external entity source boundary
//! - [`domain`] - core domain types, filters, and errors
//! - [`config`] - configuration management
//! - [`audit`] - redaction audit logging (hashed, never plaintext)
//! - [`logging`] - structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use veil::analysis::AnalysisEngine;
//! use veil::config::EngineConfig;
//! use veil::domain::EntityFilter;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let engine = AnalysisEngine::new(EngineConfig::default())?;
//!
//!     let redacted = engine
//!         .redact("BSN nummer is 123456782", &EntityFilter::All)
//!         .await;
//!     assert_eq!(redacted, "BSN nummer is [BSN]");
//!     Ok(())
//! }
//! ```
//!
//! ## Analysis without redaction
//!
//! Analysis is non-destructive; the original text is never mutated and each
//! final span carries the literal matched substring for preview display:
//!
//! ```rust,no_run
//! use veil::analysis::AnalysisEngine;
//! use veil::config::EngineConfig;
//! use veil::domain::EntityFilter;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let engine = AnalysisEngine::new(EngineConfig::default())?;
//! let analysis = engine
//!     .analyze_value("Bel 06-12345678", &EntityFilter::All)
//!     .await;
//!
//! for m in &analysis.matches {
//!     println!("{:?} at {}..{}: {}", m.entity, m.start, m.end, m.text);
//! }
//! println!("preview: {}", analysis.preview);
//! # Ok(())
//! # }
//! ```
//!
//! ## Restricting entity types
//!
//! The per-call [`domain::EntityFilter`] is the only request-time
//! configuration; recognizer definitions are fixed when the engine is
//! built:
//!
//! ```rust,no_run
//! use veil::domain::{DetectionOptions, EntityFilter, EntityType};
//!
//! // From a typed set
//! let filter = EntityFilter::only([EntityType::NationalId, EntityType::Phone]);
//!
//! // Or lowered from user-facing category toggles
//! let options = DetectionOptions { phones: true, emails: true, ..Default::default() };
//! let filter = options.to_filter();
//! ```
//!
//! ## Error handling
//!
//! Fatal errors (malformed catalogue, invalid configuration) surface at
//! engine construction. Per-value analysis never fails: an entity-source
//! error degrades that value to pattern-only results, and audit sink
//! failures are logged without blocking redaction.
//!
//! ## Logging
//!
//! Veil uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting scan");
//! warn!(entity_source = "remote_ner", "Entity source failed, degrading to patterns");
//! ```

pub mod adapters;
pub mod analysis;
pub mod audit;
pub mod config;
pub mod domain;
pub mod logging;
pub mod redaction;
