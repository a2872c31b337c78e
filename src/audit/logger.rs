//! Audit logger for redaction operations

use crate::domain::PiiMatch;
use anyhow::{Context, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Audit log entry for one redacted value
#[derive(Debug, Serialize)]
struct AuditLogEntry {
    timestamp: String,
    /// SHA-256 hash of the full original value (never log plaintext PII)
    value_hash: String,
    detections_count: usize,
    processing_time_ms: u64,
    detections: Vec<AuditDetection>,
}

/// Audit detection entry (with hashed PII)
#[derive(Debug, Serialize)]
struct AuditDetection {
    entity: String,
    start: usize,
    end: usize,
    score: f32,
    /// SHA-256 hash of the matched substring
    match_hash: String,
}

/// Audit logger for redaction operations
///
/// Writes one entry per redacted value. Original values and matched
/// substrings are stored as SHA-256 hashes so the audit trail can confirm
/// *that* a value was redacted, and correlate identical values, without
/// retaining the PII itself.
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
    enabled: bool,
}

impl AuditLogger {
    /// Create a new audit logger
    pub fn new(log_path: PathBuf, json_format: bool, enabled: bool) -> Result<Self> {
        if enabled {
            if let Some(parent) = log_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create audit log directory: {}", parent.display())
                    })?;
                }
            }
        }

        Ok(Self {
            log_path,
            json_format,
            enabled,
        })
    }

    /// Log one redaction operation
    pub fn log_redaction(
        &self,
        original: &str,
        matches: &[PiiMatch],
        processing_time_ms: u64,
    ) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let entry = AuditLogEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            value_hash: hash_value(original),
            detections_count: matches.len(),
            processing_time_ms,
            detections: matches
                .iter()
                .map(|m| AuditDetection {
                    entity: format!("{:?}", m.entity),
                    start: m.start,
                    end: m.end,
                    score: m.score,
                    match_hash: hash_value(&m.text),
                })
                .collect(),
        };

        self.write_entry(&entry)
    }

    /// Write an audit entry to the log file
    fn write_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open audit log: {}", self.log_path.display()))?;

        if self.json_format {
            let json_line =
                serde_json::to_string(entry).context("Failed to serialize audit entry")?;
            writeln!(file, "{json_line}").context("Failed to write audit entry")?;
        } else {
            writeln!(
                file,
                "[{}] Value: {} | Detections: {} | Time: {}ms",
                entry.timestamp, entry.value_hash, entry.detections_count, entry.processing_time_ms
            )
            .context("Failed to write audit entry")?;
        }

        Ok(())
    }
}

/// Hash a value using SHA-256
fn hash_value(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let result = hasher.finalize();
    format!("{result:x}")
}
