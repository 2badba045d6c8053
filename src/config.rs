//! # Builder Configuration Module
//!
//! Configuration for the default action policy, loaded from an optional TOML
//! file and then from environment variables.
//!
//! ## Environment Variables
//!
//! ### `ACTIONS_ROOT_TYPE`
//!
//! Name of the type at the root of every controller hierarchy. Methods whose
//! root definition is declared there (`Equals`, `GetHashCode`, ...) are never
//! treated as actions.
//!
//! Default: `object`
//!
//! ### `ACTIONS_SKIP_SERVICE_PARAMS`
//!
//! When `true`, parameters bound from `services` (framework-injected) are left
//! out of action parameter lists.
//!
//! Default: `false`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use brrtrouter_actions::config::BuilderConfig;
//!
//! let config = BuilderConfig::from_toml_file("config/actions.toml")?;
//! println!("root type: {}", config.root_type);
//! # Ok::<(), brrtrouter_actions::config::ConfigError>(())
//! ```
//!
//! ```toml
//! root_type = "object"
//! skip_service_parameters = true
//! ```

use crate::model::DEFAULT_ROOT_TYPE;
use serde::Deserialize;
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Tuning for [`crate::model::DefaultActionPolicy`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Root type for the override rule (default: `object`)
    pub root_type: String,
    /// Drop framework-injected parameters from action models (default: `false`)
    pub skip_service_parameters: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            root_type: DEFAULT_ROOT_TYPE.to_string(),
            skip_service_parameters: false,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        message: String,
    },
    EmptyRootType,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "failed to read config '{}': {}", path.display(), source)
            }
            ConfigError::Parse { path, message } => {
                write!(f, "invalid config '{}': {}", path.display(), message)
            }
            ConfigError::EmptyRootType => write!(f, "root_type must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl BuilderConfig {
    /// Defaults overridden by environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Values from a TOML file, then environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed, or if the
    /// resulting root type is empty.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: BuilderConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyRootType`] for a blank root type.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root_type.trim().is_empty() {
            return Err(ConfigError::EmptyRootType);
        }
        Ok(())
    }

    fn apply_env(&mut self) {
        if let Ok(root_type) = env::var("ACTIONS_ROOT_TYPE") {
            if !root_type.trim().is_empty() {
                self.root_type = root_type;
            }
        }
        if let Ok(val) = env::var("ACTIONS_SKIP_SERVICE_PARAMS") {
            match val.parse() {
                Ok(skip) => self.skip_service_parameters = skip,
                Err(_) => warn!(
                    value = %val,
                    "Ignoring ACTIONS_SKIP_SERVICE_PARAMS: expected true or false"
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = BuilderConfig::default();
        assert_eq!(config.root_type, "object");
        assert!(!config.skip_service_parameters);
    }

    #[test]
    fn test_from_toml_file() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "root_type = \"Base\"\nskip_service_parameters = true").unwrap();
        let config = BuilderConfig::from_toml_file(file.path()).unwrap();
        // Env overrides are not set in the test environment.
        if env::var("ACTIONS_ROOT_TYPE").is_err() {
            assert_eq!(config.root_type, "Base");
        }
        if env::var("ACTIONS_SKIP_SERVICE_PARAMS").is_err() {
            assert!(config.skip_service_parameters);
        }
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "skip_service_parameters = false").unwrap();
        let config = BuilderConfig::from_toml_file(file.path()).unwrap();
        if env::var("ACTIONS_ROOT_TYPE").is_err() {
            assert_eq!(config.root_type, "object");
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = BuilderConfig::from_toml_file("/nonexistent/actions.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_blank_root_type_rejected() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "root_type = \"  \"").unwrap();
        if env::var("ACTIONS_ROOT_TYPE").is_err() {
            let err = BuilderConfig::from_toml_file(file.path()).unwrap_err();
            assert!(matches!(err, ConfigError::EmptyRootType));
        }
    }
}
