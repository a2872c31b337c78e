//! Scan reporting for batch redaction
//!
//! Aggregates per-value analysis outcomes into detection statistics,
//! sample redactions, and warnings for review before (or after) a batch is
//! committed.

use crate::domain::{EntityType, ValueAnalysis};
use crate::redaction::token_for;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Write as _;

/// Maximum sample entries taken from a single value
const SAMPLES_PER_VALUE: usize = 3;

/// Maximum length of a sample snippet before truncation
const SAMPLE_SNIPPET_LEN: usize = 16;

/// Scan report with PII detection statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Total values analyzed
    pub total_values: usize,

    /// Total PII matches detected
    pub total_pii_detected: usize,

    /// PII detections by entity type
    pub detections_by_type: HashMap<EntityType, usize>,

    /// Sample redactions (truncated match → replacement token)
    pub samples: Vec<RedactionSample>,

    /// Warnings collected during the scan
    pub warnings: Vec<String>,

    /// Processing statistics
    pub stats: ProcessingStats,
}

/// Sample redaction showing what was replaced with which token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionSample {
    /// Entity type of the match
    pub entity: EntityType,

    /// Truncated matched text
    pub snippet: String,

    /// The redaction token it became
    pub replacement: String,

    /// Confidence score (0.0 - 1.0)
    pub score: f32,
}

/// Processing statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingStats {
    /// Average processing time per value (ms)
    pub avg_processing_time_ms: u64,

    /// Total processing time (ms)
    pub total_processing_time_ms: u64,

    /// Values with PII detected
    pub values_with_pii: usize,

    /// Values without PII
    pub values_without_pii: usize,
}

impl ScanReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self {
            total_values: 0,
            total_pii_detected: 0,
            detections_by_type: HashMap::new(),
            samples: Vec::new(),
            warnings: Vec::new(),
            stats: ProcessingStats {
                avg_processing_time_ms: 0,
                total_processing_time_ms: 0,
                values_with_pii: 0,
                values_without_pii: 0,
            },
        }
    }

    /// Add the outcome of one analyzed value
    pub fn add_value(&mut self, analysis: &ValueAnalysis, processing_time_ms: u64) {
        self.total_values += 1;
        self.stats.total_processing_time_ms += processing_time_ms;

        if analysis.matches.is_empty() {
            self.stats.values_without_pii += 1;
        } else {
            self.stats.values_with_pii += 1;
            self.total_pii_detected += analysis.matches.len();

            for m in &analysis.matches {
                *self.detections_by_type.entry(m.entity).or_insert(0) += 1;
            }

            for m in analysis.matches.iter().take(SAMPLES_PER_VALUE) {
                self.samples.push(RedactionSample {
                    entity: m.entity,
                    snippet: truncate(&m.text, SAMPLE_SNIPPET_LEN),
                    replacement: token_for(m.entity),
                    score: m.score,
                });
            }
        }

        if self.total_values > 0 {
            self.stats.avg_processing_time_ms =
                self.stats.total_processing_time_ms / self.total_values as u64;
        }
    }

    /// Record a warning
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Human-readable summary of the scan
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Scanned {} values: {} with PII, {} without ({} matches total)",
            self.total_values,
            self.stats.values_with_pii,
            self.stats.values_without_pii,
            self.total_pii_detected
        );

        let mut by_type: Vec<(&EntityType, &usize)> = self.detections_by_type.iter().collect();
        by_type.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        for (entity, count) in by_type {
            let _ = writeln!(out, "  {:?}: {}", entity, count);
        }

        for warning in &self.warnings {
            let _ = writeln!(out, "  warning: {warning}");
        }

        out
    }
}

impl Default for ScanReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Truncate a snippet on a character boundary
fn truncate(text: &str, max_len: usize) -> String {
    if text.len() <= max_len {
        return text.to_string();
    }
    let mut cut = max_len;
    while cut > 0 && !text.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &text[..cut])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DetectionSource, PiiMatch};

    fn analysis_with_matches(matches: Vec<PiiMatch>) -> ValueAnalysis {
        ValueAnalysis {
            original: "x".to_string(),
            preview: "x".to_string(),
            has_pii: !matches.is_empty(),
            matches,
        }
    }

    #[test]
    fn test_empty_report() {
        let report = ScanReport::new();
        assert_eq!(report.total_values, 0);
        assert_eq!(report.total_pii_detected, 0);
    }

    #[test]
    fn test_add_values_updates_stats() {
        let mut report = ScanReport::new();

        let m = PiiMatch::new(
            EntityType::NationalId,
            0,
            9,
            0.9,
            "123456782",
            DetectionSource::Pattern,
        );
        report.add_value(&analysis_with_matches(vec![m]), 4);
        report.add_value(&analysis_with_matches(vec![]), 2);

        assert_eq!(report.total_values, 2);
        assert_eq!(report.total_pii_detected, 1);
        assert_eq!(report.stats.values_with_pii, 1);
        assert_eq!(report.stats.values_without_pii, 1);
        assert_eq!(report.stats.total_processing_time_ms, 6);
        assert_eq!(report.stats.avg_processing_time_ms, 3);
        assert_eq!(
            report.detections_by_type.get(&EntityType::NationalId),
            Some(&1)
        );
    }

    #[test]
    fn test_samples_capped_per_value() {
        let mut report = ScanReport::new();
        let matches: Vec<PiiMatch> = (0..5)
            .map(|i| {
                PiiMatch::new(
                    EntityType::Phone,
                    i * 12,
                    i * 12 + 11,
                    0.9,
                    "06-12345678",
                    DetectionSource::Pattern,
                )
            })
            .collect();

        report.add_value(&analysis_with_matches(matches), 1);
        assert_eq!(report.samples.len(), 3);
        assert_eq!(report.samples[0].replacement, "[TEL]");
    }

    #[test]
    fn test_snippet_truncated() {
        assert_eq!(truncate("kort", 16), "kort");
        let long = "een-heel-lang-polisnummer-XYZ123456789";
        let snippet = truncate(long, 16);
        assert!(snippet.ends_with("..."));
        assert!(snippet.len() <= 19);
    }

    #[test]
    fn test_summary_mentions_counts() {
        let mut report = ScanReport::new();
        let m = PiiMatch::new(
            EntityType::Email,
            0,
            10,
            0.9,
            "a@b.nl",
            DetectionSource::Pattern,
        );
        report.add_value(&analysis_with_matches(vec![m]), 1);
        report.add_warning("entity source unavailable");

        let summary = report.summary();
        assert!(summary.contains("Scanned 1 values"));
        assert!(summary.contains("Email"));
        assert!(summary.contains("entity source unavailable"));
    }
}
