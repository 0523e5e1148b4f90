//! Configuration System
//!
//! Layered configuration for the codec and logging. Layers, lowest precedence first:
//! built-in defaults, an explicit config file (TOML or JSON), then `TOPOMERGE__*`
//! environment variables (`TOPOMERGE__LOGGING__LEVEL=debug`).

use crate::error::ConfigError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

mod defaults;
mod sources;

pub use sources::environment::ENV_PREFIX;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopologyConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Output options for written topology files
    #[serde(default)]
    pub codec: CodecConfig,
}

/// Encoding options for topology files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Indent JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

impl TopologyConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.logging.validate()
    }
}

/// Builds a [`TopologyConfig`] from defaults, an optional file, and the environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Built-in defaults only; neither files nor environment are consulted.
    pub fn defaults() -> TopologyConfig {
        TopologyConfig::default()
    }

    /// Load defaults overlaid by the process environment.
    pub fn load() -> Result<TopologyConfig, ConfigError> {
        Self::load_layers(None, None)
    }

    /// Load defaults, then `path` (required), then the process environment.
    pub fn load_from_file(path: &Path) -> Result<TopologyConfig, ConfigError> {
        Self::load_layers(Some(path), None)
    }

    /// Like [`ConfigLoader::load_from_file`] but with an explicit environment map
    /// in place of the process environment.
    pub fn load_with_env(
        path: Option<&Path>,
        env: HashMap<String, String>,
    ) -> Result<TopologyConfig, ConfigError> {
        Self::load_layers(path, Some(env))
    }

    fn load_layers(
        path: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<TopologyConfig, ConfigError> {
        let mut builder = defaults::builder_with_defaults()?;
        if let Some(path) = path {
            builder = sources::file::add_to_builder(builder, path)?;
        }
        builder = sources::environment::add_to_builder(builder, env);

        let config: TopologyConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        debug!(
            file = ?path.map(|p| p.display().to_string()),
            level = %config.logging.level,
            pretty = config.codec.pretty,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Write `config` as TOML, creating parent directories.
    pub fn save_to_file(config: &TopologyConfig, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Load(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
        let toml_content = toml::to_string_pretty(config).map_err(|e| {
            ConfigError::Invalid(format!("Failed to serialize configuration: {}", e))
        })?;
        std::fs::write(path, toml_content).map_err(|e| {
            ConfigError::Load(format!(
                "Failed to write configuration to {}: {}",
                path.display(),
                e
            ))
        })
    }
}
