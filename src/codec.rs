//! JSON encoding of topology descriptors.
//!
//! Wire shape: `{"Producers": [{"addr": .., "port": .., "valency": .., "node": ..,
//! "friendly_name": .., "operator": ..}]}` with absent optional fields omitted.

use crate::config::CodecConfig;
use crate::error::TopologyError;
use crate::topology::Topology;
use serde::de::Error as _;
use serde_json::Value;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

/// Decode a topology from JSON bytes.
///
/// The top level and every producer must be JSON objects; positional arrays are rejected.
pub fn decode(bytes: &[u8]) -> Result<Topology, TopologyError> {
    serde_json::from_slice::<Value>(bytes)
        .and_then(|value| check_shape(&value))
        .and_then(|()| serde_json::from_slice(bytes))
        .map_err(|source| TopologyError::Decode {
            len: bytes.len(),
            source,
        })
}

fn check_shape(value: &Value) -> Result<(), serde_json::Error> {
    let root = value.as_object().ok_or_else(|| {
        serde_json::Error::custom(format!(
            "expected a topology object, found {}",
            kind_of(value)
        ))
    })?;
    if let Some(Value::Array(producers)) = root.get("Producers") {
        if let Some((i, peer)) = producers.iter().enumerate().find(|(_, p)| !p.is_object()) {
            return Err(serde_json::Error::custom(format!(
                "Producers[{}]: expected a peer object, found {}",
                i,
                kind_of(peer)
            )));
        }
    }
    Ok(())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Encode a topology as compact JSON.
pub fn encode(topology: &Topology) -> Result<Vec<u8>, TopologyError> {
    serde_json::to_vec(topology).map_err(TopologyError::Encode)
}

/// Encode a topology as indented JSON, for files people edit by hand.
pub fn encode_pretty(topology: &Topology) -> Result<Vec<u8>, TopologyError> {
    serde_json::to_vec_pretty(topology).map_err(TopologyError::Encode)
}

/// Encode compactly or indented, as `config.pretty` selects.
pub fn encode_with(topology: &Topology, config: &CodecConfig) -> Result<Vec<u8>, TopologyError> {
    if config.pretty {
        encode_pretty(topology)
    } else {
        encode(topology)
    }
}

/// Read a whole byte stream and decode it.
pub fn read_topology<R: Read>(mut reader: R) -> Result<Topology, TopologyError> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data).map_err(TopologyError::read)?;
    decode(&data)
}

/// Encode compactly and write to a byte stream.
pub fn write_topology<W: Write>(topology: &Topology, writer: W) -> Result<(), TopologyError> {
    write_bytes(&encode(topology)?, writer)
}

fn write_bytes<W: Write>(data: &[u8], mut writer: W) -> Result<(), TopologyError> {
    writer.write_all(data).map_err(TopologyError::write)?;
    writer.flush().map_err(TopologyError::write)
}

/// Read and decode a topology file.
pub fn read_file(path: &Path) -> Result<Topology, TopologyError> {
    let data = std::fs::read(path).map_err(|e| TopologyError::read(e).at_path(path))?;
    let topology = decode(&data)?;
    debug!(
        path = %path.display(),
        bytes = data.len(),
        peers = topology.len(),
        "Read topology file"
    );
    Ok(topology)
}

/// Encode a topology and write it to `path`, creating parent directories.
pub fn write_file(
    topology: &Topology,
    path: &Path,
    config: &CodecConfig,
) -> Result<(), TopologyError> {
    let data = encode_with(topology, config)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| TopologyError::write(e).at_path(path))?;
    }
    let file = std::fs::File::create(path).map_err(|e| TopologyError::write(e).at_path(path))?;
    write_bytes(&data, file).map_err(|e| e.at_path(path))?;
    debug!(
        path = %path.display(),
        bytes = data.len(),
        peers = topology.len(),
        "Wrote topology file"
    );
    Ok(())
}
