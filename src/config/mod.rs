//! Configuration management for Veil.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Veil uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for optional settings
//! - Environment variable overrides (`VEIL_*`)
//! - Type-safe configuration structs
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use veil::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("veil.toml")?;
//!
//! println!("Language: {}", config.language);
//! println!("Entity source enabled: {}", config.ner.enabled);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`EngineConfig`] - top-level engine settings (language, catalogue)
//! - [`ContextConfig`] - context boosting window and magnitude
//! - [`NerConfig`] - external entity source connection
//! - [`AuditConfig`] - redaction audit log
//! - [`LoggingConfig`] - structured logging

pub mod loader;
pub mod schema;

pub use loader::load_config;
pub use schema::{AuditConfig, ContextConfig, EngineConfig, LoggingConfig, NerConfig};
