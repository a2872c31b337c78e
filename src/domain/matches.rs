//! Match and analysis result models

use crate::domain::EntityType;
use serde::{Deserialize, Serialize};

/// How a match was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionSource {
    /// Regex pattern recognizer
    Pattern,
    /// External statistical entity recognizer
    Model,
}

/// A detected PII span within one text value
///
/// `start..end` is a half-open byte range into the analyzed text. Candidates
/// produced by recognizers and the entity source use the same shape; after
/// reconciliation the surviving matches are guaranteed non-overlapping and
/// sorted by `start`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PiiMatch {
    /// Entity type of the match
    pub entity: EntityType,
    /// Byte offset of the first matched byte
    pub start: usize,
    /// Byte offset one past the last matched byte
    pub end: usize,
    /// Confidence score (0.0 - 1.0)
    pub score: f32,
    /// The literal matched substring, for audit/preview display
    pub text: String,
    /// Which detection path produced the match
    pub source: DetectionSource,
}

impl PiiMatch {
    /// Create a new match
    pub fn new(
        entity: EntityType,
        start: usize,
        end: usize,
        score: f32,
        text: impl Into<String>,
        source: DetectionSource,
    ) -> Self {
        Self {
            entity,
            start,
            end,
            score: score.clamp(0.0, 1.0),
            text: text.into(),
            source,
        }
    }

    /// Length of the span in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span is empty (never true for well-formed matches)
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Whether two half-open spans intersect
    pub fn overlaps(&self, other: &PiiMatch) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Set the confidence score, clamped to [0.0, 1.0]
    pub fn set_score(&mut self, score: f32) {
        self.score = score.clamp(0.0, 1.0);
    }
}

/// Analysis outcome for a single text value
///
/// Carries both the non-destructive view (original text plus final matches)
/// and the redacted preview, mirroring what a tabular caller shows per cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueAnalysis {
    /// The analyzed text, unmodified
    pub original: String,
    /// Final reconciled matches, sorted by start, non-overlapping
    pub matches: Vec<PiiMatch>,
    /// The redacted rendition of the value
    pub preview: String,
    /// Whether any PII was detected
    pub has_pii: bool,
}

impl ValueAnalysis {
    /// Analysis of a value in which nothing was detected
    pub fn clean(original: impl Into<String>) -> Self {
        let original = original.into();
        let preview = original.clone();
        Self {
            original,
            matches: Vec::new(),
            preview,
            has_pii: false,
        }
    }

    /// Total number of final matches
    pub fn total_matches(&self) -> usize {
        self.matches.len()
    }
}
