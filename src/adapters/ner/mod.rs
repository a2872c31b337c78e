//! External entity source boundary
//!
//! The statistical named-entity recognizer is an external collaborator: the
//! engine only consumes its output (entity label, span, confidence) through
//! the [`EntitySource`] trait. A failing source never fails an analysis;
//! the engine degrades to pattern-only candidates for that value.

pub mod client;
pub mod models;

use crate::domain::Result;
use async_trait::async_trait;

pub use client::RemoteNerClient;
pub use models::{ModelEntity, NerRequest, NerResponse};

/// Trait for external entity recognition implementations
#[async_trait]
pub trait EntitySource: Send + Sync {
    /// Human-readable source name, used in log events
    fn name(&self) -> &str;

    /// Recognize entities in a single text value
    ///
    /// Returning an error is an acceptable outcome: the caller isolates the
    /// failure to the current value and continues with pattern candidates.
    async fn recognize(&self, text: &str, language: &str) -> Result<Vec<ModelEntity>>;
}

/// Entity source that never returns candidates
///
/// Used for pattern-only deployments and as the default when no external
/// recognizer is configured.
pub struct NullEntitySource;

#[async_trait]
impl EntitySource for NullEntitySource {
    fn name(&self) -> &str {
        "none"
    }

    async fn recognize(&self, _text: &str, _language: &str) -> Result<Vec<ModelEntity>> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_null_source_returns_nothing() {
        let source = NullEntitySource;
        let entities = source.recognize("Jan Visser", "nl").await.unwrap();
        assert!(entities.is_empty());
    }
}
