//! Main analysis engine
//!
//! This module provides the core [`AnalysisEngine`] that orchestrates PII
//! detection, reconciliation, and redaction for text values.
//!
//! # Architecture
//!
//! One analysis call runs two detection paths over the same text:
//! - **Pattern recognizers**: regex catalogue with validators and context
//!   boosting
//! - **Entity source**: the external statistical recognizer, consumed at
//!   its trait boundary
//!
//! The union of candidates is reconciled into a non-overlapping span set,
//! which feeds both the analysis payload (non-destructive) and the redactor.
//!
//! # Examples
//!
//! ```no_run
//! use veil::analysis::AnalysisEngine;
//! use veil::config::EngineConfig;
//! use veil::domain::EntityFilter;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let engine = AnalysisEngine::new(EngineConfig::default())?;
//!
//! let matches = engine
//!     .analyze("BSN nummer is 123456782", &EntityFilter::All)
//!     .await;
//! println!("Detected {} PII matches", matches.len());
//!
//! let redacted = engine
//!     .redact("BSN nummer is 123456782", &EntityFilter::All)
//!     .await;
//! assert_eq!(redacted, "BSN nummer is [BSN]");
//! # Ok(())
//! # }
//! ```

use crate::adapters::ner::{EntitySource, NullEntitySource, RemoteNerClient};
use crate::analysis::catalogue::RecognizerCatalogue;
use crate::analysis::context::ContextScorer;
use crate::analysis::reconcile::reconcile;
use crate::analysis::report::ScanReport;
use crate::audit::AuditLogger;
use crate::config::EngineConfig;
use crate::domain::{EntityFilter, PiiMatch, ValueAnalysis};
use crate::redaction::redact_spans;
use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Instant;

/// Main analysis engine
///
/// # Thread Safety
///
/// The engine is immutable after construction and can be shared across
/// async tasks using `Arc`. Each analysis of one text value is an
/// independent computation with no shared mutable state; a batch over many
/// values is an embarrassingly parallel fan-out.
pub struct AnalysisEngine {
    config: EngineConfig,
    catalogue: Arc<RecognizerCatalogue>,
    scorer: ContextScorer,
    source: Arc<dyn EntitySource>,
    audit: Option<AuditLogger>,
}

impl AnalysisEngine {
    /// Create a new analysis engine
    ///
    /// Validates the configuration, compiles the recognizer catalogue
    /// (built-in or from `catalogue_path`), and wires up the entity source
    /// and audit logger. A malformed catalogue is fatal here: the engine
    /// refuses to exist with a broken rule set.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation fails, the catalogue
    /// cannot be compiled, or the audit logger cannot be initialized.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config
            .validate()
            .context("Invalid engine configuration")?;

        let catalogue = match config.catalogue_path {
            Some(ref path) => RecognizerCatalogue::from_file(path)?,
            None => RecognizerCatalogue::builtin()?,
        };

        let source: Arc<dyn EntitySource> = if config.ner.enabled {
            Arc::new(
                RemoteNerClient::new(config.ner.clone())
                    .context("Failed to create entity source client")?,
            )
        } else {
            Arc::new(NullEntitySource)
        };

        let audit = if config.audit.enabled {
            Some(AuditLogger::new(
                config.audit.log_path.clone(),
                config.audit.json_format,
                true,
            )?)
        } else {
            None
        };

        let scorer = ContextScorer::new(config.context.window_chars, config.context.boost);

        tracing::info!(
            recognizers = catalogue.len(),
            entity_source = source.name(),
            "Analysis engine initialized"
        );

        Ok(Self {
            config,
            catalogue: Arc::new(catalogue),
            scorer,
            source,
            audit,
        })
    }

    /// Replace the entity source
    ///
    /// Mostly useful for tests and for callers that manage their own
    /// recognizer service connection.
    pub fn with_entity_source(mut self, source: Arc<dyn EntitySource>) -> Self {
        self.source = source;
        self
    }

    /// The language tag passed to the entity source
    pub fn language(&self) -> &str {
        &self.config.language
    }

    /// Analyze one text value
    ///
    /// Returns the final reconciled span set: non-overlapping, sorted by
    /// start, each match carrying the literal matched substring. Empty or
    /// blank input yields no matches. Analysis never fails: an entity
    /// source error degrades to pattern-only results for this value.
    pub async fn analyze(&self, text: &str, filter: &EntityFilter) -> Vec<PiiMatch> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let mut candidates = self.pattern_candidates(text, filter);
        candidates.extend(self.model_candidates(text, filter).await);

        reconcile(candidates)
    }

    /// Analyze one text value and render its redacted preview
    ///
    /// The original text is returned untouched alongside the matches; the
    /// preview shows what redaction would produce.
    pub async fn analyze_value(&self, text: &str, filter: &EntityFilter) -> ValueAnalysis {
        let matches = self.analyze(text, filter).await;
        let preview = redact_spans(text, &matches);

        ValueAnalysis {
            original: text.to_string(),
            has_pii: !matches.is_empty(),
            preview,
            matches,
        }
    }

    /// Redact one text value
    ///
    /// Every retained span is replaced by its category token; all
    /// non-matched text is preserved byte-for-byte. A value without
    /// detections is returned unchanged. Audit sink errors are logged and
    /// never block redaction.
    pub async fn redact(&self, text: &str, filter: &EntityFilter) -> String {
        let started = Instant::now();
        let matches = self.analyze(text, filter).await;
        let redacted = redact_spans(text, &matches);

        if let Some(ref audit) = self.audit {
            let elapsed_ms = started.elapsed().as_millis() as u64;
            if let Err(e) = audit.log_redaction(text, &matches, elapsed_ms) {
                tracing::warn!(error = %e, "Failed to write audit entry");
            }
        }

        redacted
    }

    /// Analyze a batch of values
    ///
    /// Values are independent; analyses run concurrently and results come
    /// back in input order. A failure inside one value (entity source,
    /// audit) never affects the others.
    pub async fn analyze_batch(
        &self,
        values: &[String],
        filter: &EntityFilter,
    ) -> Vec<ValueAnalysis> {
        futures::future::join_all(values.iter().map(|value| self.analyze_value(value, filter)))
            .await
    }

    /// Redact a batch of values, preserving input order
    pub async fn redact_batch(&self, values: &[String], filter: &EntityFilter) -> Vec<String> {
        futures::future::join_all(values.iter().map(|value| self.redact(value, filter))).await
    }

    /// Redact a batch of values and produce a scan report
    pub async fn redact_batch_with_report(
        &self,
        values: &[String],
        filter: &EntityFilter,
    ) -> (Vec<String>, ScanReport) {
        let mut report = ScanReport::new();
        let mut outputs = Vec::with_capacity(values.len());

        for value in values {
            let started = Instant::now();
            let analysis = self.analyze_value(value, filter).await;
            let elapsed_ms = started.elapsed().as_millis() as u64;

            report.add_value(&analysis, elapsed_ms);

            if let Some(ref audit) = self.audit {
                if let Err(e) = audit.log_redaction(value, &analysis.matches, elapsed_ms) {
                    tracing::warn!(error = %e, "Failed to write audit entry");
                    report.add_warning(format!("audit entry failed: {e}"));
                }
            }

            outputs.push(analysis.preview);
        }

        (outputs, report)
    }

    /// Run the pattern recognizers and context scorer over the text
    fn pattern_candidates(&self, text: &str, filter: &EntityFilter) -> Vec<PiiMatch> {
        let mut candidates = Vec::new();

        for recognizer in self.catalogue.recognizers() {
            if !filter.allows(recognizer.entity()) {
                continue;
            }

            let mut found = recognizer.recognize(text);
            for candidate in &mut found {
                self.scorer
                    .apply(text, recognizer.context_keywords(), candidate);
            }
            candidates.extend(found);
        }

        candidates
    }

    /// Collect candidates from the external entity source
    ///
    /// An error from the source is isolated to this value: it is logged
    /// and treated as "no additional PII".
    async fn model_candidates(&self, text: &str, filter: &EntityFilter) -> Vec<PiiMatch> {
        match self.source.recognize(text, &self.config.language).await {
            Ok(entities) => entities
                .into_iter()
                .filter_map(|entity| entity.into_match(text))
                .filter(|m| filter.allows(m.entity))
                .collect(),
            Err(e) => {
                tracing::warn!(
                    entity_source = self.source.name(),
                    error = %e,
                    "Entity source failed, continuing with pattern candidates only"
                );
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EntityType;

    fn engine() -> AnalysisEngine {
        AnalysisEngine::new(EngineConfig::default()).unwrap()
    }

    #[test]
    fn test_engine_creation() {
        let result = AnalysisEngine::new(EngineConfig::default());
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_blank_input_yields_no_matches() {
        let engine = engine();
        assert!(engine.analyze("", &EntityFilter::All).await.is_empty());
        assert!(engine.analyze("   ", &EntityFilter::All).await.is_empty());
    }

    #[tokio::test]
    async fn test_valid_bsn_detected_and_boosted() {
        let engine = engine();
        let matches = engine
            .analyze("BSN nummer is 123456782", &EntityFilter::All)
            .await;

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].entity, EntityType::NationalId);
        assert_eq!(matches[0].text, "123456782");
        // 0.9 from the 11-proof plus context boost, capped at 1.0
        assert_eq!(matches[0].score, 1.0);
    }

    #[tokio::test]
    async fn test_filter_excludes_entity_types() {
        let engine = engine();
        let filter = EntityFilter::only([EntityType::Email]);
        let matches = engine
            .analyze("BSN nummer is 123456782", &filter)
            .await;
        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn test_redact_without_detections_is_identity() {
        let engine = engine();
        let text = "Geen PII in deze tekst, alleen nummers 12345 en woorden.";
        let redacted = engine.redact(text, &EntityFilter::All).await;
        assert_eq!(redacted, text);
    }

    #[tokio::test]
    async fn test_batch_preserves_order() {
        let engine = engine();
        let values = vec![
            "BSN nummer is 123456782".to_string(),
            "niets hier".to_string(),
            "mail: jan@example.nl".to_string(),
        ];

        let analyses = engine.analyze_batch(&values, &EntityFilter::All).await;
        assert_eq!(analyses.len(), 3);
        assert!(analyses[0].has_pii);
        assert!(!analyses[1].has_pii);
        assert!(analyses[2].has_pii);
        assert_eq!(analyses[1].preview, "niets hier");
    }
}
