//! Analysis module for Veil
//!
//! This module hosts the detection pipeline: the recognizer catalogue,
//! match validation, context boosting, span reconciliation, and the engine
//! that ties them to the external entity source.
//!
//! # Pipeline
//!
//! For one text value:
//! 1. **Recognize**: every active pattern recognizer scans the text;
//!    validators reject or re-score candidates
//! 2. **Boost**: the context scorer raises confidence near category
//!    keywords
//! 3. **Merge**: candidates from patterns and the entity source are
//!    reconciled into a non-overlapping span set
//!
//! # Usage
//!
//! ```rust,ignore
//! use veil::analysis::AnalysisEngine;
//! use veil::config::EngineConfig;
//! use veil::domain::EntityFilter;
//!
//! let engine = AnalysisEngine::new(EngineConfig::default())?;
//! let matches = engine.analyze(text, &EntityFilter::All).await;
//! ```

pub mod catalogue;
pub mod context;
pub mod engine;
pub mod recognizer;
pub mod reconcile;
pub mod report;
pub mod validator;

// Re-export main types
pub use catalogue::RecognizerCatalogue;
pub use context::ContextScorer;
pub use engine::AnalysisEngine;
pub use recognizer::PatternRecognizer;
pub use reconcile::reconcile;
pub use report::ScanReport;
pub use validator::{eleven_proof, MatchValidator, Validation};
