//! Redaction label mapping

use crate::domain::EntityType;

/// The generic fallback token for unmapped entity types
pub const GENERIC_TOKEN: &str = "[PII]";

/// Redaction token for an entity type
///
/// Total over the entity enum and stable across calls: the same entity type
/// always yields the same bracketed token. Model labels outside the known
/// vocabulary have already collapsed to [`EntityType::Other`], which carries
/// the generic `[PII]` token.
pub fn token_for(entity: EntityType) -> String {
    format!("[{}]", entity.label())
}
