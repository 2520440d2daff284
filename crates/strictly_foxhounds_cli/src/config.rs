//! Console configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::Path;
use strictly_foxhounds::{check_dimension, DEFAULT_DIMENSION};
use tracing::{debug, info, instrument};

/// Settings for the console game.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct Config {
    /// Board dimension used when the command line names none
    #[serde(default = "default_dimension")]
    dimension: usize,
}

fn default_dimension() -> usize {
    DEFAULT_DIMENSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dimension: default_dimension(),
        }
    }
}

impl Config {
    /// Reads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// names a dimension outside `[4, 26]`.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(format!("Failed to read config from {}: {}", path.display(), e))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::new(format!("Failed to parse config from {}: {}", path.display(), e))
        })?;

        check_dimension(config.dimension).map_err(|e| {
            ConfigError::new(format!("Invalid config in {}: {}", path.display(), e.kind))
        })?;

        info!(dimension = config.dimension, "Loaded config");
        Ok(config)
    }

    /// Like [`from_file`](Self::from_file), but a missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be used.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No config file; using defaults");
            return Ok(Self::default());
        }
        Self::from_file(path)
    }
}

/// Configuration error with caller location.
#[derive(Debug, Clone, Display, Error)]
#[display("Config Error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message
    pub message: String,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_dimension() {
        assert_eq!(*Config::default().dimension(), 8);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_reads_dimension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("foxhounds.toml");
        std::fs::write(&path, "dimension = 12\n").unwrap();
        assert_eq!(*Config::from_file(&path).unwrap().dimension(), 12);
    }

    #[test]
    fn test_empty_file_uses_default_dimension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("foxhounds.toml");
        std::fs::write(&path, "").unwrap();
        assert_eq!(Config::from_file(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_rejects_out_of_range_dimension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("foxhounds.toml");
        std::fs::write(&path, "dimension = 30\n").unwrap();
        let err = Config::load_or_default(&path).unwrap_err();
        assert!(err.message.contains("Invalid config"), "{err}");
    }

    #[test]
    fn test_rejects_bad_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("foxhounds.toml");
        std::fs::write(&path, "dimension = \"eight\"\n").unwrap();
        let err = Config::from_file(&path).unwrap_err();
        assert!(err.message.contains("Failed to parse"), "{err}");
    }
}
