//! Recognizer catalogue
//!
//! Loads recognizer definitions from TOML and compiles them into the
//! immutable registry the engine scans with. The built-in catalogue covers
//! Dutch PII (BSN, postal codes, IBAN, phone numbers, policy numbers,
//! email); deployments can substitute their own catalogue file.
//!
//! Catalogue construction is strict: a malformed regex, an unknown entity
//! name, or an unknown validator fails construction so the process refuses
//! to start with a broken rule set.

use crate::analysis::recognizer::{CompiledPattern, PatternRecognizer};
use crate::analysis::validator::MatchValidator;
use crate::domain::EntityType;
use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Pattern definition from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct PatternDefinition {
    /// Pattern name
    pub name: String,
    /// Regular expression source
    pub regex: String,
    /// Base confidence score (0.0 - 1.0)
    pub score: f32,
}

/// Recognizer definition from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct RecognizerDefinition {
    /// Entity type name (e.g. "NATIONAL_ID")
    pub entity: String,
    /// Context keywords that boost confidence when found near a match
    #[serde(default)]
    pub context: Vec<String>,
    /// Optional validator name (e.g. "eleven_proof")
    pub validator: Option<String>,
    /// Regex patterns for this recognizer
    pub patterns: Vec<PatternDefinition>,
}

/// Catalogue file container
#[derive(Debug, Deserialize)]
struct CatalogueFile {
    recognizers: HashMap<String, RecognizerDefinition>,
}

/// Immutable registry of pattern recognizers
///
/// Built once at engine construction and shared (via `Arc`) across all
/// concurrent analyses; never mutated afterwards.
pub struct RecognizerCatalogue {
    recognizers: Vec<PatternRecognizer>,
}

impl RecognizerCatalogue {
    /// Load a catalogue from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!(
                "Failed to read recognizer catalogue: {}",
                path.as_ref().display()
            )
        })?;

        Self::from_toml(&content)
    }

    /// Build a catalogue from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: CatalogueFile =
            toml::from_str(content).context("Failed to parse recognizer catalogue TOML")?;

        let mut recognizers = Vec::with_capacity(file.recognizers.len());

        for (name, definition) in file.recognizers {
            recognizers.push(Self::compile(&name, definition)?);
        }

        // TOML tables carry no order; sort by name so listings are stable
        recognizers.sort_by(|a, b| a.name().cmp(b.name()));

        Ok(Self { recognizers })
    }

    /// The built-in Dutch PII catalogue
    pub fn builtin() -> Result<Self> {
        let builtin_toml = include_str!("../../patterns/nl_recognizers.toml");
        Self::from_toml(builtin_toml)
    }

    /// All recognizers, sorted by name
    pub fn recognizers(&self) -> &[PatternRecognizer] {
        &self.recognizers
    }

    /// Number of recognizers in the catalogue
    pub fn len(&self) -> usize {
        self.recognizers.len()
    }

    /// Whether the catalogue is empty
    pub fn is_empty(&self) -> bool {
        self.recognizers.is_empty()
    }

    fn compile(name: &str, definition: RecognizerDefinition) -> Result<PatternRecognizer> {
        let entity = EntityType::from_name(&definition.entity).with_context(|| {
            format!(
                "Unknown entity type in recognizer '{}': {}",
                name, definition.entity
            )
        })?;

        let validator = match definition.validator.as_deref() {
            Some(validator_name) => MatchValidator::from_name(validator_name).with_context(|| {
                format!("Unknown validator in recognizer '{name}': {validator_name}")
            })?,
            None => MatchValidator::AcceptAll,
        };

        let mut patterns = Vec::with_capacity(definition.patterns.len());
        for pattern in definition.patterns {
            let regex = Regex::new(&pattern.regex).with_context(|| {
                format!(
                    "Invalid regex in recognizer '{}', pattern '{}': {}",
                    name, pattern.name, pattern.regex
                )
            })?;

            patterns.push(CompiledPattern {
                name: pattern.name,
                regex,
                score: pattern.score.clamp(0.0, 1.0),
            });
        }

        Ok(PatternRecognizer::new(
            name,
            entity,
            patterns,
            definition.context,
            validator,
        ))
    }
}
