//! Integration tests for reading, merging, and writing topology files

use super::test_utils::{relay, BASE_TOPOLOGY, OVERRIDE_TOPOLOGY};
use std::fs;
use tempfile::TempDir;
use topomerge::codec::{read_file, write_file};
use topomerge::config::CodecConfig;
use topomerge::{decode, merge, TopologyError};

#[test]
fn test_merge_base_and_override_files() {
    let temp_dir = TempDir::new().unwrap();
    let base_path = temp_dir.path().join("topology.json");
    let override_path = temp_dir.path().join("topology.override.json");
    fs::write(&base_path, BASE_TOPOLOGY).unwrap();
    fs::write(&override_path, OVERRIDE_TOPOLOGY).unwrap();

    let base = read_file(&base_path).unwrap();
    let overrides = read_file(&override_path).unwrap();

    let merged = merge(Some(&base), [Some(&overrides)]).unwrap();
    assert_eq!(
        merged.producers,
        vec![
            relay("relays-new.cardano-mainnet.iohk.io", 3001).with_valency(2),
            relay("10.0.0.12", 6000).with_node_name("core-1"),
            relay("10.0.0.13", 6000)
                .with_node_name("core-2")
                .with_friendly_name("Core Two")
                .with_operator("base-ops"),
            relay("192.168.1.40", 3001).with_valency(1),
        ]
    );

    let out_path = temp_dir.path().join("out").join("merged.json");
    write_file(&merged, &out_path, &CodecConfig::default()).unwrap();
    assert_eq!(read_file(&out_path).unwrap(), merged);

    let written = fs::read_to_string(&out_path).unwrap();
    assert!(written.contains("\"Producers\""));
    assert!(!written.contains("null"));
}

#[test]
fn test_compact_file_output() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("compact.json");
    let topology = decode(BASE_TOPOLOGY.as_bytes()).unwrap();

    write_file(&topology, &path, &CodecConfig { pretty: false }).unwrap();
    let written = fs::read_to_string(&path).unwrap();
    assert!(!written.contains('\n'));
    assert_eq!(decode(written.as_bytes()).unwrap(), topology);
}

#[test]
fn test_read_missing_file_reports_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.json");

    match read_file(&path).unwrap_err() {
        TopologyError::Read { path: Some(p), .. } => assert_eq!(p, path),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_read_malformed_file_is_decode_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, r#"{"Producers": [{"addr": "10.0.0.1"}]}"#).unwrap();

    let err = read_file(&path).unwrap_err();
    assert!(matches!(err, TopologyError::Decode { .. }));
    assert!(err.to_string().contains("port"));
}

#[test]
fn test_write_into_directory_path_fails() {
    let temp_dir = TempDir::new().unwrap();
    let topology = decode(BASE_TOPOLOGY.as_bytes()).unwrap();

    let err = write_file(&topology, temp_dir.path(), &CodecConfig::default()).unwrap_err();
    assert!(matches!(err, TopologyError::Write { path: Some(_), .. }));
}

#[test]
fn test_null_producers_file_reads_as_empty() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.json");
    fs::write(&path, r#"{"Producers":null}"#).unwrap();

    let topology = read_file(&path).unwrap();
    assert!(topology.is_empty());
    assert!(merge(Some(&topology), [None]).unwrap().is_empty());
}

#[test]
fn test_array_shaped_file_is_decode_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("positional.json");
    fs::write(&path, r#"{"Producers":[["10.0.0.1",3001]]}"#).unwrap();

    assert!(matches!(
        read_file(&path).unwrap_err(),
        TopologyError::Decode { .. }
    ));
}
