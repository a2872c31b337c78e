//! Context-based confidence boosting
//!
//! A match for "9 consecutive digits" is far more likely to be a citizen
//! service number when the surrounding text mentions one. The scorer checks
//! a bounded window around each candidate for a recognizer's context
//! keywords and raises the confidence when any of them appears.

use crate::domain::PiiMatch;

/// Default window, in bytes on either side of a match
pub const DEFAULT_WINDOW_CHARS: usize = 64;

/// Default score increase when context evidence is found
pub const DEFAULT_BOOST: f32 = 0.35;

/// Boosts candidate scores based on surrounding context keywords
///
/// The boost is applied at most once per candidate, regardless of how many
/// keywords occur in the window, and the resulting score is capped at 1.0.
/// More context evidence therefore never lowers a score, and re-scoring the
/// same occurrence cannot compound.
#[derive(Debug, Clone, Copy)]
pub struct ContextScorer {
    window_chars: usize,
    boost: f32,
}

impl ContextScorer {
    /// Create a scorer with explicit window and boost settings
    pub fn new(window_chars: usize, boost: f32) -> Self {
        Self {
            window_chars,
            boost: boost.clamp(0.0, 1.0),
        }
    }

    /// Raise the candidate's score if a context keyword appears nearby
    ///
    /// Keywords are expected lowercase (the catalogue lowercases them at
    /// construction); the window text is lowercased before the containment
    /// check, so matching is case-insensitive. The matched span itself is
    /// excluded from the window.
    pub fn apply(&self, text: &str, keywords: &[String], candidate: &mut PiiMatch) {
        if keywords.is_empty() {
            return;
        }

        let before = self.window_before(text, candidate.start).to_lowercase();
        let after = self.window_after(text, candidate.end).to_lowercase();

        let found = keywords
            .iter()
            .any(|keyword| before.contains(keyword.as_str()) || after.contains(keyword.as_str()));

        if found {
            candidate.set_score(candidate.score + self.boost);
        }
    }

    fn window_before<'a>(&self, text: &'a str, start: usize) -> &'a str {
        let mut lo = start.saturating_sub(self.window_chars);
        while lo > 0 && !text.is_char_boundary(lo) {
            lo -= 1;
        }
        &text[lo..start]
    }

    fn window_after<'a>(&self, text: &'a str, end: usize) -> &'a str {
        let mut hi = usize::min(end.saturating_add(self.window_chars), text.len());
        while hi < text.len() && !text.is_char_boundary(hi) {
            hi += 1;
        }
        &text[end..hi]
    }
}

impl Default for ContextScorer {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_CHARS, DEFAULT_BOOST)
    }
}
