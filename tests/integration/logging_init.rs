//! Integration tests for logging initialization.
//!
//! Only this test installs a global subscriber in the integration binary.

use tempfile::TempDir;
use topomerge::logging::{init_logging, LoggingConfig};
use topomerge::{merge, ConfigError, PeerRecord, Topology};

#[test]
fn test_init_logging_to_file_once() {
    let temp_dir = TempDir::new().unwrap();
    let log_file = temp_dir.path().join("logs").join("topomerge.log");
    let config = LoggingConfig {
        level: "debug".to_string(),
        format: "json".to_string(),
        output: "file".to_string(),
        file: Some(log_file.clone()),
        ..LoggingConfig::default()
    };

    init_logging(Some(&config)).unwrap();
    assert!(log_file.exists());

    let topology = Topology::new(vec![PeerRecord::new("10.0.0.1", 3001)]);
    assert!(merge(Some(&topology), [None]).is_some());

    let err = init_logging(Some(&config)).unwrap_err();
    assert!(matches!(err, ConfigError::Logging(_)));
}
