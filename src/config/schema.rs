//! Configuration schema
//!
//! Type-safe configuration structs with serde defaults, validation, and
//! `VEIL_*` environment variable overrides. Recognizer definitions live in
//! the catalogue file, not here; this schema only selects which catalogue
//! to load and tunes engine behavior around it.

use crate::domain::{Result, VeilError};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Language tag passed to the entity source
    pub language: String,

    /// Path to a custom recognizer catalogue TOML; `None` uses the
    /// built-in Dutch catalogue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalogue_path: Option<PathBuf>,

    /// Context boosting settings
    pub context: ContextConfig,

    /// External entity source settings
    pub ner: NerConfig,

    /// Audit logging settings
    pub audit: AuditConfig,

    /// Structured logging settings
    pub logging: LoggingConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            catalogue_path: None,
            context: ContextConfig::default(),
            ner: NerConfig::default(),
            audit: AuditConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.language.trim().is_empty() {
            return Err(VeilError::Configuration(
                "language must not be empty".to_string(),
            ));
        }

        if let Some(ref path) = self.catalogue_path {
            if !path.exists() {
                return Err(VeilError::Configuration(format!(
                    "Recognizer catalogue file not found: {}",
                    path.display()
                )));
            }
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                return Err(VeilError::Configuration(format!(
                    "Recognizer catalogue must be a TOML file: {}",
                    path.display()
                )));
            }
        }

        self.context.validate()?;
        self.ner.validate()?;
        self.audit.validate()?;

        Ok(())
    }

    /// Apply environment variable overrides (`VEIL_*`)
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("VEIL_LANGUAGE") {
            self.language = val;
        }

        if let Ok(val) = std::env::var("VEIL_CATALOGUE_PATH") {
            self.catalogue_path = Some(PathBuf::from(val));
        }

        self.context.apply_env_overrides()?;
        self.ner.apply_env_overrides()?;
        self.audit.apply_env_overrides()?;
        self.logging.apply_env_overrides()?;

        Ok(())
    }
}

/// Context boosting configuration
///
/// The window and boost are deliberately configuration, not per-recognizer
/// constants: every recognizer shares the same boosting behavior.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Window size in bytes on either side of a match
    pub window_chars: usize,

    /// Score increase applied when a context keyword is found
    pub boost: f32,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            window_chars: 64,
            boost: 0.35,
        }
    }
}

impl ContextConfig {
    /// Validate context settings
    pub fn validate(&self) -> Result<()> {
        if self.window_chars == 0 {
            return Err(VeilError::Configuration(
                "context.window_chars must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.boost) {
            return Err(VeilError::Configuration(format!(
                "context.boost must be within [0.0, 1.0], got {}",
                self.boost
            )));
        }
        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("VEIL_CONTEXT_WINDOW_CHARS") {
            self.window_chars = val.parse().map_err(|_| {
                VeilError::Configuration(format!("Invalid VEIL_CONTEXT_WINDOW_CHARS: {val}"))
            })?;
        }
        if let Ok(val) = std::env::var("VEIL_CONTEXT_BOOST") {
            self.boost = val.parse().map_err(|_| {
                VeilError::Configuration(format!("Invalid VEIL_CONTEXT_BOOST: {val}"))
            })?;
        }
        Ok(())
    }
}

/// External entity source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NerConfig {
    /// Enable the external entity source; disabled means pattern-only
    /// analysis
    pub enabled: bool,

    /// Base URL of the entity recognition service
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_seconds: u64,

    /// Optional basic-auth username
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Optional basic-auth password; never serialized back out
    #[serde(skip_serializing)]
    pub password: Option<SecretString>,
}

impl Default for NerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: "http://127.0.0.1:5005".to_string(),
            timeout_seconds: 30,
            username: None,
            password: None,
        }
    }
}

impl NerConfig {
    /// Validate entity source settings
    pub fn validate(&self) -> Result<()> {
        if self.enabled {
            if self.base_url.trim().is_empty() {
                return Err(VeilError::Configuration(
                    "ner.base_url must not be empty when the entity source is enabled"
                        .to_string(),
                ));
            }
            if self.timeout_seconds == 0 {
                return Err(VeilError::Configuration(
                    "ner.timeout_seconds must be at least 1".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("VEIL_NER_ENABLED") {
            self.enabled = val
                .parse()
                .map_err(|_| VeilError::Configuration(format!("Invalid VEIL_NER_ENABLED: {val}")))?;
        }
        if let Ok(val) = std::env::var("VEIL_NER_BASE_URL") {
            self.base_url = val;
        }
        if let Ok(val) = std::env::var("VEIL_NER_TIMEOUT_SECONDS") {
            self.timeout_seconds = val.parse().map_err(|_| {
                VeilError::Configuration(format!("Invalid VEIL_NER_TIMEOUT_SECONDS: {val}"))
            })?;
        }
        if let Ok(val) = std::env::var("VEIL_NER_USERNAME") {
            self.username = Some(val);
        }
        if let Ok(val) = std::env::var("VEIL_NER_PASSWORD") {
            self.password = Some(SecretString::new(val));
        }
        Ok(())
    }
}

/// Audit logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Enable the redaction audit log
    pub enabled: bool,

    /// Audit log file path
    pub log_path: PathBuf,

    /// Use JSON-lines format for audit entries
    pub json_format: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_path: PathBuf::from("./audit/redaction.log"),
            json_format: true,
        }
    }
}

impl AuditConfig {
    /// Validate audit configuration
    pub fn validate(&self) -> Result<()> {
        if self.enabled {
            if let Some(parent) = self.log_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        VeilError::Configuration(format!(
                            "Failed to create audit log directory {}: {e}",
                            parent.display()
                        ))
                    })?;
                }
            }
        }
        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("VEIL_AUDIT_ENABLED") {
            self.enabled = val.parse().map_err(|_| {
                VeilError::Configuration(format!("Invalid VEIL_AUDIT_ENABLED: {val}"))
            })?;
        }
        if let Ok(val) = std::env::var("VEIL_AUDIT_LOG_PATH") {
            self.log_path = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("VEIL_AUDIT_JSON_FORMAT") {
            self.json_format = val.parse().map_err(|_| {
                VeilError::Configuration(format!("Invalid VEIL_AUDIT_JSON_FORMAT: {val}"))
            })?;
        }
        Ok(())
    }
}

/// Structured logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable file logging alongside console output
    pub file_enabled: bool,

    /// Directory for rotated log files
    pub file_path: String,

    /// Rotation policy: "daily" or "hourly"
    pub file_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_path: "./logs".to_string(),
            file_rotation: "daily".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("VEIL_LOG_LEVEL") {
            self.level = val;
        }
        if let Ok(val) = std::env::var("VEIL_LOG_FILE_ENABLED") {
            self.file_enabled = val.parse().map_err(|_| {
                VeilError::Configuration(format!("Invalid VEIL_LOG_FILE_ENABLED: {val}"))
            })?;
        }
        if let Ok(val) = std::env::var("VEIL_LOG_FILE_PATH") {
            self.file_path = val;
        }
        Ok(())
    }
}

fn default_language() -> String {
    "nl".to_string()
}
