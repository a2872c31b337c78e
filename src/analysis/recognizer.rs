//! Pattern-based PII recognizer

use crate::analysis::validator::{MatchValidator, Validation};
use crate::domain::{DetectionSource, EntityType, PiiMatch};
use regex::Regex;

/// A compiled regex pattern with its base confidence
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// Pattern name from the catalogue
    pub name: String,
    /// Compiled regex
    pub regex: Regex,
    /// Base confidence score (0.0 - 1.0)
    pub score: f32,
}

/// One PII category's detection rule set
///
/// A recognizer bundles the regex patterns, context keywords, and optional
/// validator for a single entity type. Recognizers are immutable after
/// catalogue construction and shared across concurrent analyses.
#[derive(Debug, Clone)]
pub struct PatternRecognizer {
    name: String,
    entity: EntityType,
    patterns: Vec<CompiledPattern>,
    context: Vec<String>,
    validator: MatchValidator,
}

impl PatternRecognizer {
    /// Create a recognizer; context keywords are lowercased here so the
    /// scorer can compare without re-normalizing per call
    pub fn new(
        name: impl Into<String>,
        entity: EntityType,
        patterns: Vec<CompiledPattern>,
        context: Vec<String>,
        validator: MatchValidator,
    ) -> Self {
        Self {
            name: name.into(),
            entity,
            patterns,
            context: context.into_iter().map(|k| k.to_lowercase()).collect(),
            validator,
        }
    }

    /// Recognizer name from the catalogue
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The entity type this recognizer detects
    pub fn entity(&self) -> EntityType {
        self.entity
    }

    /// Lowercased context keywords for this category
    pub fn context_keywords(&self) -> &[String] {
        &self.context
    }

    /// The patterns this recognizer scans with
    pub fn patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }

    /// Scan a text value with every pattern
    ///
    /// Each pattern contributes its own non-overlapping left-to-right
    /// matches; overlaps *across* patterns (and across recognizers) are
    /// allowed here and resolved later by the reconciler. Candidates the
    /// validator rejects are discarded and never surface in any output.
    pub fn recognize(&self, text: &str) -> Vec<PiiMatch> {
        let mut matches = Vec::new();

        for pattern in &self.patterns {
            for found in pattern.regex.find_iter(text) {
                let mut candidate = PiiMatch::new(
                    self.entity,
                    found.start(),
                    found.end(),
                    pattern.score,
                    found.as_str(),
                    DetectionSource::Pattern,
                );

                match self.validator.validate(found.as_str()) {
                    Validation::Accept => {}
                    Validation::AcceptWithScore(score) => candidate.set_score(score),
                    Validation::Reject => continue,
                }

                matches.push(candidate);
            }
        }

        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bsn_recognizer() -> PatternRecognizer {
        PatternRecognizer::new(
            "bsn",
            EntityType::NationalId,
            vec![CompiledPattern {
                name: "bsn_plain".to_string(),
                regex: Regex::new(r"\b\d{9}\b").unwrap(),
                score: 0.5,
            }],
            vec!["BSN".to_string(), "nummer".to_string()],
            MatchValidator::ElevenProof,
        )
    }

    #[test]
    fn test_valid_bsn_recognized_with_raised_score() {
        let recognizer = bsn_recognizer();
        let matches = recognizer.recognize("bsn is 123456782");

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].entity, EntityType::NationalId);
        assert_eq!(matches[0].text, "123456782");
        assert!((matches[0].score - 0.9).abs() < f32::EPSILON);
    }

    #[test]
    fn test_invalid_bsn_discarded_entirely() {
        let recognizer = bsn_recognizer();
        let matches = recognizer.recognize("bsn is 123456789");
        assert!(matches.is_empty());
    }

    #[test]
    fn test_multiple_matches_per_pattern() {
        let recognizer = bsn_recognizer();
        let matches = recognizer.recognize("123456782 en 111222333");
        assert_eq!(matches.len(), 2);
        assert!(matches[0].start < matches[1].start);
    }

    #[test]
    fn test_context_keywords_lowercased() {
        let recognizer = bsn_recognizer();
        assert_eq!(recognizer.context_keywords(), ["bsn", "nummer"]);
    }

    #[test]
    fn test_byte_offsets_cover_match() {
        let recognizer = bsn_recognizer();
        let text = "nr: 123456782.";
        let matches = recognizer.recognize(text);
        assert_eq!(matches.len(), 1);
        assert_eq!(&text[matches[0].start..matches[0].end], "123456782");
    }
}
