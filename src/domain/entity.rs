//! PII entity type enumeration

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of PII entity types the engine can report
///
/// Pattern recognizers produce the deterministic types (national ID, postal
/// code, bank account, phone, email, policy number); the statistical entity
/// source contributes the remaining ones (person, organization, location,
/// date/time, credit card). Anything the model reports outside this set is
/// mapped to [`EntityType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    /// Person names
    Person,
    /// Organization/company names
    Organization,
    /// Geographic locations (cities, addresses)
    Location,
    /// Dates and times
    DateTime,
    /// Credit card numbers
    CreditCard,
    /// Dutch citizen service number (BSN)
    NationalId,
    /// Dutch postal code
    PostalCode,
    /// Bank account number (IBAN)
    BankAccount,
    /// Telephone numbers (mobile, landline, international)
    Phone,
    /// Email addresses
    Email,
    /// Insurance policy numbers
    PolicyNumber,
    /// Any other uniquely identifying value
    Other,
}

impl EntityType {
    /// Redaction label stem for this entity type
    ///
    /// The redactor wraps the stem in brackets, e.g. `NationalId` becomes
    /// `[BSN]` in redacted output. [`EntityType::Other`] is the generic
    /// fallback label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Person => "NAAM",
            Self::Organization => "ORGANISATIE",
            Self::Location => "LOCATIE",
            Self::DateTime => "DATUM",
            Self::CreditCard => "CREDITCARD",
            Self::NationalId => "BSN",
            Self::PostalCode => "POSTCODE",
            Self::BankAccount => "IBAN",
            Self::Phone => "TEL",
            Self::Email => "EMAIL",
            Self::PolicyNumber => "POLISNR",
            Self::Other => "PII",
        }
    }

    /// Parse a catalogue entity name into an entity type
    ///
    /// Used when loading recognizer definitions; unknown names are a
    /// configuration error, so this is strict and returns `None` rather
    /// than falling back to [`EntityType::Other`].
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "PERSON" => Some(Self::Person),
            "ORGANIZATION" => Some(Self::Organization),
            "LOCATION" => Some(Self::Location),
            "DATE_TIME" => Some(Self::DateTime),
            "CREDIT_CARD" => Some(Self::CreditCard),
            "NATIONAL_ID" => Some(Self::NationalId),
            "POSTAL_CODE" => Some(Self::PostalCode),
            "BANK_ACCOUNT" => Some(Self::BankAccount),
            "PHONE" => Some(Self::Phone),
            "EMAIL" => Some(Self::Email),
            "POLICY_NUMBER" => Some(Self::PolicyNumber),
            "OTHER" => Some(Self::Other),
            _ => None,
        }
    }

    /// Map an entity-type string reported by the statistical model
    ///
    /// The model uses its own label vocabulary (`PERSON`, `IBAN_CODE`,
    /// `PHONE_NUMBER`, ...). This mapping is total: unknown labels become
    /// [`EntityType::Other`] so redaction always has a fallback token.
    pub fn from_model_label(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "PERSON" | "PER" => Self::Person,
            "ORGANIZATION" | "ORG" => Self::Organization,
            "LOCATION" | "LOC" | "GPE" => Self::Location,
            "DATE_TIME" | "DATE" | "TIME" => Self::DateTime,
            "CREDIT_CARD" => Self::CreditCard,
            "NATIONAL_ID" | "NL_BSN" => Self::NationalId,
            "POSTAL_CODE" | "NL_POSTCODE" => Self::PostalCode,
            "BANK_ACCOUNT" | "NL_IBAN" | "IBAN" | "IBAN_CODE" => Self::BankAccount,
            "PHONE" | "PHONE_NUMBER" | "NL_PHONE" => Self::Phone,
            "EMAIL" | "EMAIL_ADDRESS" => Self::Email,
            "POLICY_NUMBER" | "NL_POLICY_NUMBER" => Self::PolicyNumber,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
