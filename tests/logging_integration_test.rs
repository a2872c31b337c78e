//! Integration test for structured logging initialization

use tempfile::tempdir;
use veil::config::LoggingConfig;
use veil::logging::init_logging;

#[test]
fn test_init_logging_with_file_output() {
    let dir = tempdir().unwrap();

    let config = LoggingConfig {
        level: "debug".to_string(),
        file_enabled: true,
        file_path: dir.path().to_string_lossy().to_string(),
        file_rotation: "daily".to_string(),
    };

    // The subscriber can only be installed once per process; this is the
    // only test in this binary that installs it
    let guard = init_logging(&config).expect("Failed to initialize logging");

    // Events must carry the crate's target to pass the veil=debug filter
    tracing::info!(target: "veil::scan", component = "test", "logging smoke test");
    tracing::debug!(target: "veil::scan", "debug level is enabled");

    // Dropping the guard flushes the non-blocking writer
    drop(guard);

    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert!(!entries.is_empty(), "expected a rotated log file");
}

#[test]
fn test_invalid_level_is_rejected() {
    let config = LoggingConfig {
        level: "verbose".to_string(),
        ..Default::default()
    };
    assert!(init_logging(&config).is_err());
}
