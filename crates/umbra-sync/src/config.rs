//! Configuration for the synchronization engine.
//!
//! Two flags, both off by default. They are external inputs -- the engine
//! never infers them:
//!
//! - `fresh_universe`: development deployments reuse the same contract
//!   address, so the persisted cache is polluted with ids from old
//!   universes. This flag bypasses the cache entirely.
//! - `claimed_coords`: whether the world runs the optional claiming mode.
//!   When disabled the claim fetch is skipped and contributes an empty
//!   set to the load-set union.

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Synchronization engine configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct SyncConfig {
    /// Bypass the persisted cache and sync from offset zero.
    #[serde(default)]
    pub fresh_universe: bool,

    /// Fetch claimed coordinates and include them in load-set planning.
    #[serde(default)]
    pub claimed_coords: bool,
}

impl SyncConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::parse(&contents)?)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, serde_yml::Error> {
        serde_yml::from_str(yaml)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_disable_both_flags() {
        let config = SyncConfig::default();
        assert!(!config.fresh_universe);
        assert!(!config.claimed_coords);
    }

    #[test]
    fn parse_empty_yaml_uses_defaults() {
        let config = SyncConfig::parse("{}").unwrap();
        assert_eq!(config, SyncConfig::default());
    }

    #[test]
    fn parse_overrides() {
        let config = SyncConfig::parse("fresh_universe: true\nclaimed_coords: true\n").unwrap();
        assert!(config.fresh_universe);
        assert!(config.claimed_coords);
    }

    #[test]
    fn unknown_field_is_rejected_gracefully() {
        // serde is permissive about unknown fields by default; the parse
        // still succeeds and known fields apply.
        let config = SyncConfig::parse("fresh_universe: true\nworld_name: test\n").unwrap();
        assert!(config.fresh_universe);
    }
}
