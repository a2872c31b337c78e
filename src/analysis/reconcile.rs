//! Span reconciliation
//!
//! Merges the candidate matches from every detection path (pattern
//! recognizers and the statistical entity source) into a single ordered,
//! non-overlapping span set.

use crate::domain::PiiMatch;
use std::cmp::Ordering;

/// Reconcile a candidate multiset into the final span set
///
/// Policy: among overlapping candidates only the strictly highest score
/// survives; exact score ties prefer the longer span, then the earlier
/// start. The remaining keys (end offset, entity type, detection source)
/// make the preference a total order, so the output is unique for a given
/// candidate multiset regardless of input order.
///
/// The returned spans are sorted by `start` and guaranteed non-overlapping;
/// that invariant is asserted because a violation is an internal-logic
/// defect, not a runtime condition.
pub fn reconcile(mut candidates: Vec<PiiMatch>) -> Vec<PiiMatch> {
    if candidates.len() <= 1 {
        return candidates;
    }

    candidates.sort_by(preference);

    let mut retained: Vec<PiiMatch> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if retained.iter().all(|kept| !kept.overlaps(&candidate)) {
            retained.push(candidate);
        }
    }

    retained.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.end.cmp(&b.end)));

    for pair in retained.windows(2) {
        assert!(
            pair[0].end <= pair[1].start,
            "reconciled span set contains overlapping spans: {}..{} and {}..{}",
            pair[0].start,
            pair[0].end,
            pair[1].start,
            pair[1].end
        );
    }

    retained
}

/// Total preference order: best candidate first
fn preference(a: &PiiMatch, b: &PiiMatch) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.len().cmp(&a.len()))
        .then_with(|| a.start.cmp(&b.start))
        .then_with(|| a.end.cmp(&b.end))
        .then_with(|| a.entity.cmp(&b.entity))
        .then_with(|| a.source.cmp(&b.source))
}
