//! Domain error types
//!
//! The error hierarchy for Veil. All errors are domain-specific and don't
//! expose third-party types; the HTTP client and parser errors from the
//! entity-source adapter are converted at the boundary.

use thiserror::Error;

/// Main Veil error type
///
/// This is the primary error type used throughout the crate. It wraps
/// specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum VeilError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Recognizer catalogue errors (malformed pattern, unknown entity)
    #[error("Catalogue error: {0}")]
    Catalogue(String),

    /// External entity source errors
    #[error("Entity source error: {0}")]
    EntitySource(#[from] EntitySourceError),

    /// Audit logging errors
    #[error("Audit error: {0}")]
    Audit(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Entity-source-specific errors
///
/// Errors that occur when calling the external statistical entity
/// recognizer. The engine never escalates these past a single value:
/// analysis degrades to pattern-only candidates for that value.
#[derive(Debug, Error)]
pub enum EntitySourceError {
    /// Failed to reach the entity source
    #[error("Failed to connect to entity source: {0}")]
    ConnectionFailed(String),

    /// The source answered with an unusable payload
    #[error("Invalid response from entity source: {0}")]
    InvalidResponse(String),

    /// Server error (5xx)
    #[error("Entity source server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Client error (4xx)
    #[error("Entity source client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Request timed out
    #[error("Entity source request timeout: {0}")]
    Timeout(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for VeilError {
    fn from(err: std::io::Error) -> Self {
        VeilError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for VeilError {
    fn from(err: serde_json::Error) -> Self {
        VeilError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for VeilError {
    fn from(err: toml::de::Error) -> Self {
        VeilError::Configuration(format!("TOML parse error: {err}"))
    }
}
