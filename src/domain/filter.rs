//! Entity-type filtering for analysis calls

use crate::domain::EntityType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Restricts which entity types an analysis call detects
///
/// The filter is the only per-call configuration the engine accepts;
/// recognizer definitions themselves are fixed at construction time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityFilter {
    /// Detect every registered entity type
    #[default]
    All,
    /// Detect only the listed entity types
    Only(BTreeSet<EntityType>),
}

impl EntityFilter {
    /// Build a filter restricted to the given types
    ///
    /// An empty iterator yields [`EntityFilter::All`]: an empty selection
    /// means "no restriction", not "detect nothing".
    pub fn only(types: impl IntoIterator<Item = EntityType>) -> Self {
        let set: BTreeSet<EntityType> = types.into_iter().collect();
        if set.is_empty() {
            Self::All
        } else {
            Self::Only(set)
        }
    }

    /// Whether the given entity type passes the filter
    pub fn allows(&self, entity: EntityType) -> bool {
        match self {
            Self::All => true,
            Self::Only(set) => set.contains(&entity),
        }
    }

    /// Whether the filter is unrestricted
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

/// User-facing PII category toggles
///
/// The selection a caller presents (e.g. checkboxes over a table preview)
/// before it is lowered to the typed [`EntityFilter`]. Some toggles span
/// more than one entity type: postal codes imply locations, phone covers the
/// full phone family.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionOptions {
    /// Person names
    pub names: bool,
    /// Organization/company names
    pub organizations: bool,
    /// Postal codes and locations
    pub postal_codes: bool,
    /// National identification numbers (BSN)
    pub national_ids: bool,
    /// Bank account numbers (IBAN)
    pub bank_accounts: bool,
    /// Telephone numbers
    pub phones: bool,
    /// Email addresses
    pub emails: bool,
    /// Dates and times
    pub dates: bool,
    /// Financial identifiers (policy numbers)
    pub financial: bool,
}

impl DetectionOptions {
    /// Select every category
    pub fn all() -> Self {
        Self {
            names: true,
            organizations: true,
            postal_codes: true,
            national_ids: true,
            bank_accounts: true,
            phones: true,
            emails: true,
            dates: true,
            financial: true,
        }
    }

    /// Lower the selection to a typed entity filter
    ///
    /// No selected category means "analyze everything".
    pub fn to_filter(&self) -> EntityFilter {
        let mut types = BTreeSet::new();

        if self.names {
            types.insert(EntityType::Person);
        }
        if self.organizations {
            types.insert(EntityType::Organization);
        }
        if self.postal_codes {
            types.insert(EntityType::PostalCode);
            types.insert(EntityType::Location);
        }
        if self.national_ids {
            types.insert(EntityType::NationalId);
        }
        if self.bank_accounts {
            types.insert(EntityType::BankAccount);
        }
        if self.phones {
            types.insert(EntityType::Phone);
        }
        if self.emails {
            types.insert(EntityType::Email);
        }
        if self.dates {
            types.insert(EntityType::DateTime);
        }
        if self.financial {
            types.insert(EntityType::PolicyNumber);
        }

        EntityFilter::only(types)
    }
}
