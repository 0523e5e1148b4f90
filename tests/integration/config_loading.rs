//! Integration tests for configuration loading

use std::collections::HashMap;
use tempfile::TempDir;
use topomerge::codec::{read_file, write_file};
use topomerge::config::{ConfigLoader, TopologyConfig};
use topomerge::{decode, ConfigError};

use super::test_utils::BASE_TOPOLOGY;

#[test]
fn test_json_config_file_is_accepted() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("topomerge.json");
    std::fs::write(
        &config_file,
        r#"{ "codec": { "pretty": false }, "logging": { "format": "json" } }"#,
    )
    .unwrap();

    let config = ConfigLoader::load_with_env(Some(&config_file), HashMap::new()).unwrap();
    assert!(!config.codec.pretty);
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_loaded_codec_config_drives_file_output() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("topomerge.toml");
    std::fs::write(&config_file, "[codec]\npretty = false\n").unwrap();
    let config = ConfigLoader::load_with_env(Some(&config_file), HashMap::new()).unwrap();

    let topology = decode(BASE_TOPOLOGY.as_bytes()).unwrap();
    let out = temp_dir.path().join("topology.json");
    write_file(&topology, &out, &config.codec).unwrap();

    assert_eq!(std::fs::read_to_string(&out).unwrap().lines().count(), 1);
    assert_eq!(read_file(&out).unwrap(), topology);
}

#[test]
fn test_file_output_without_log_path_is_invalid() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("topomerge.toml");
    std::fs::write(&config_file, "[logging]\noutput = \"file\"\n").unwrap();

    let err = ConfigLoader::load_with_env(Some(&config_file), HashMap::new()).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_malformed_config_file_is_load_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("topomerge.toml");
    std::fs::write(&config_file, "[codec\npretty = ").unwrap();

    let err = ConfigLoader::load_with_env(Some(&config_file), HashMap::new()).unwrap_err();
    assert!(matches!(err, ConfigError::Load(_)));
}

#[test]
fn test_unrelated_environment_is_ignored() {
    let env: HashMap<String, String> = [
        ("TOPOMERGE_LOG", "debug"),
        ("OTHER__LOGGING__LEVEL", "trace"),
        ("PATH", "/usr/bin"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let config = ConfigLoader::load_with_env(None, env).unwrap();
    assert_eq!(config, TopologyConfig::default());
}
