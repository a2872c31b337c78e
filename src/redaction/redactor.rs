//! Span replacement
//!
//! Rewrites a text value by substituting each reconciled span with its
//! redaction token while preserving every non-matched byte exactly.

use crate::domain::PiiMatch;
use crate::redaction::labels::token_for;

/// Replace every span in `spans` with its redaction token
///
/// Spans are processed in descending order of `start`, so replacements
/// never invalidate the offsets of spans still to be processed. With an
/// empty span set the input is returned unchanged.
///
/// The caller provides a reconciled span set: spans must be in-range and
/// non-overlapping. Out-of-range spans are a contract violation of the
/// reconciler and assert rather than being silently skipped.
pub fn redact_spans(text: &str, spans: &[PiiMatch]) -> String {
    if spans.is_empty() {
        return text.to_string();
    }

    let mut ordered: Vec<&PiiMatch> = spans.iter().collect();
    ordered.sort_by(|a, b| b.start.cmp(&a.start));

    let mut output = text.to_string();
    for span in ordered {
        assert!(
            span.start < span.end && span.end <= text.len(),
            "span {}..{} out of range for value of length {}",
            span.start,
            span.end,
            text.len()
        );
        output.replace_range(span.start..span.end, &token_for(span.entity));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DetectionSource, EntityType};

    fn span(entity: EntityType, start: usize, end: usize, text: &str) -> PiiMatch {
        PiiMatch::new(entity, start, end, 0.9, text, DetectionSource::Pattern)
    }

    #[test]
    fn test_empty_span_set_is_identity() {
        let text = "Geen PII in deze tekst, alleen nummers 12345 en woorden.";
        assert_eq!(redact_spans(text, &[]), text);
    }

    #[test]
    fn test_single_span() {
        let text = "BSN nummer is 123456782";
        let spans = vec![span(EntityType::NationalId, 14, 23, "123456782")];
        assert_eq!(redact_spans(text, &spans), "BSN nummer is [BSN]");
    }

    #[test]
    fn test_multiple_spans_replaced_back_to_front() {
        let text = "Bel me op 06-12345678 of +31612345678";
        let spans = vec![
            span(EntityType::Phone, 10, 21, "06-12345678"),
            span(EntityType::Phone, 25, 37, "+31612345678"),
        ];
        assert_eq!(redact_spans(text, &spans), "Bel me op [TEL] of [TEL]");
    }

    #[test]
    fn test_span_order_does_not_matter() {
        let text = "a@b.nl belt 06-12345678";
        let forward = vec![
            span(EntityType::Email, 0, 6, "a@b.nl"),
            span(EntityType::Phone, 12, 23, "06-12345678"),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        assert_eq!(redact_spans(text, &forward), redact_spans(text, &reversed));
        assert_eq!(redact_spans(text, &forward), "[EMAIL] belt [TEL]");
    }

    #[test]
    fn test_non_matched_segments_preserved() {
        let text = "pre 123456782 mid jan@example.nl post";
        let spans = vec![
            span(EntityType::NationalId, 4, 13, "123456782"),
            span(EntityType::Email, 18, 32, "jan@example.nl"),
        ];
        let redacted = redact_spans(text, &spans);

        // Splitting at the tokens must reproduce the untouched segments
        let segments: Vec<&str> = redacted
            .split("[BSN]")
            .flat_map(|part| part.split("[EMAIL]"))
            .collect();
        assert_eq!(segments, vec!["pre ", " mid ", " post"]);
    }

    #[test]
    fn test_multibyte_text_around_spans() {
        let text = "Cliënt: 123456782 — déjà bekend";
        let start = text.find('1').unwrap();
        let spans = vec![span(EntityType::NationalId, start, start + 9, "123456782")];
        assert_eq!(redact_spans(text, &spans), "Cliënt: [BSN] — déjà bekend");
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_span_asserts() {
        let text = "kort";
        let spans = vec![span(EntityType::NationalId, 0, 99, "x")];
        redact_spans(text, &spans);
    }
}
