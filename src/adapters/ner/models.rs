//! Wire models for the external entity source

use crate::domain::{DetectionSource, EntityType, PiiMatch};
use serde::{Deserialize, Serialize};

/// Request payload sent to the entity recognition service
#[derive(Debug, Clone, Serialize)]
pub struct NerRequest<'a> {
    /// The text value to analyze
    pub text: &'a str,
    /// Language tag (e.g. "nl")
    pub language: &'a str,
}

/// Response payload from the entity recognition service
#[derive(Debug, Clone, Deserialize)]
pub struct NerResponse {
    /// Recognized entities; absent means none
    #[serde(default)]
    pub entities: Vec<ModelEntity>,
}

/// One entity candidate as reported by the statistical model
///
/// Offsets use the same half-open byte-range convention as the rest of the
/// engine. The entity type is the model's own label vocabulary and is mapped
/// into [`EntityType`] when the candidate enters reconciliation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelEntity {
    /// Model-side entity label (e.g. "PERSON", "IBAN_CODE")
    pub entity_type: String,
    /// Byte offset of the first matched byte
    pub start: usize,
    /// Byte offset one past the last matched byte
    pub end: usize,
    /// Model confidence (0.0 - 1.0)
    pub score: f32,
}

impl ModelEntity {
    /// Convert into a candidate match against the analyzed text
    ///
    /// Returns `None` for spans that are empty, out of bounds, or not on
    /// UTF-8 character boundaries; a model that disagrees with the engine
    /// about offsets must not be allowed to corrupt the rewrite.
    pub fn into_match(self, text: &str) -> Option<PiiMatch> {
        if self.start >= self.end || self.end > text.len() {
            tracing::warn!(
                entity_type = %self.entity_type,
                start = self.start,
                end = self.end,
                text_len = text.len(),
                "Dropping model entity with out-of-range span"
            );
            return None;
        }

        if !text.is_char_boundary(self.start) || !text.is_char_boundary(self.end) {
            tracing::warn!(
                entity_type = %self.entity_type,
                start = self.start,
                end = self.end,
                "Dropping model entity with span off character boundaries"
            );
            return None;
        }

        let entity = EntityType::from_model_label(&self.entity_type);
        Some(PiiMatch::new(
            entity,
            self.start,
            self.end,
            self.score,
            &text[self.start..self.end],
            DetectionSource::Model,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_match_extracts_text() {
        let entity = ModelEntity {
            entity_type: "PERSON".to_string(),
            start: 0,
            end: 9,
            score: 0.85,
        };

        let m = entity.into_match("Jan Visser belt").unwrap();
        assert_eq!(m.entity, EntityType::Person);
        assert_eq!(m.text, "Jan Visse");
        assert_eq!(m.source, DetectionSource::Model);
    }

    #[test]
    fn test_out_of_range_span_dropped() {
        let entity = ModelEntity {
            entity_type: "PERSON".to_string(),
            start: 10,
            end: 99,
            score: 0.85,
        };
        assert!(entity.into_match("kort").is_none());
    }

    #[test]
    fn test_empty_span_dropped() {
        let entity = ModelEntity {
            entity_type: "PERSON".to_string(),
            start: 3,
            end: 3,
            score: 0.85,
        };
        assert!(entity.into_match("tekst").is_none());
    }

    #[test]
    fn test_non_boundary_span_dropped() {
        let entity = ModelEntity {
            entity_type: "PERSON".to_string(),
            start: 0,
            end: 1,
            score: 0.85,
        };
        // 'é' is two bytes; end = 1 splits it
        assert!(entity.into_match("é").is_none());
    }

    #[test]
    fn test_unknown_label_maps_to_other() {
        let entity = ModelEntity {
            entity_type: "SOMETHING_NEW".to_string(),
            start: 0,
            end: 4,
            score: 0.5,
        };
        let m = entity.into_match("abcd").unwrap();
        assert_eq!(m.entity, EntityType::Other);
    }
}
