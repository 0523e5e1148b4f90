//! Error types for topology decoding, encoding, and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Serialization and I/O errors for topology descriptors.
///
/// The merge engine has no error conditions; only the codec produces these.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("Failed to read topology{}: {source}", source_path(.path))]
    Read {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode topology ({len} bytes): {source}")]
    Decode {
        len: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write topology{}: {source}", target_path(.path))]
    Write {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode topology: {0}")]
    Encode(#[source] serde_json::Error),
}

impl TopologyError {
    pub(crate) fn read(source: std::io::Error) -> Self {
        TopologyError::Read { path: None, source }
    }

    pub(crate) fn write(source: std::io::Error) -> Self {
        TopologyError::Write { path: None, source }
    }

    /// Attach a file path to a read or write error that has none yet.
    pub(crate) fn at_path(self, at: impl Into<PathBuf>) -> Self {
        match self {
            TopologyError::Read { path: None, source } => TopologyError::Read {
                path: Some(at.into()),
                source,
            },
            TopologyError::Write { path: None, source } => TopologyError::Write {
                path: Some(at.into()),
                source,
            },
            other => other,
        }
    }
}

fn source_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" from {}", p.display()))
        .unwrap_or_default()
}

fn target_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" to {}", p.display()))
        .unwrap_or_default()
}

/// Configuration and logging setup errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Logging initialization failed: {0}")]
    Logging(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::Load(err.to_string())
    }
}
