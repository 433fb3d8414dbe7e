//! Configuration file schema for companion.
//!
//! A configuration sets the default language hint and output format, paths to
//! skip when walking directories, and the thresholds that drive insights.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::Thresholds;
use crate::languages::Language;
use crate::report::OutputFormat;

/// Default configuration file names, searched in the working directory.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &["companion.yaml", ".companion.yaml"];

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct Config {
    /// Default language hint when a file extension does not decide it.
    #[serde(default)]
    pub language: Option<Language>,
    /// "pretty" (default) or "json"
    #[serde(default)]
    pub format: Option<OutputFormat>,
    /// Glob patterns for paths to exclude when walking directories (e.g., "**/dist/**")
    #[serde(default)]
    pub excluded_paths: Vec<String>,
    #[serde(default)]
    pub thresholds: Thresholds,
}

impl Config {
    /// Parse a configuration from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a configuration from YAML text.
    pub fn parse_str(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as unit, not as a map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Load an explicit file, or the first discovered one, or defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => discover(Path::new(".")),
        };

        let config = match path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading configuration");
                Self::parse_file(&path)?
            }
            None => Self::default(),
        };

        validate(&config)?;
        Ok(config)
    }

    /// Render as YAML, e.g. for `companion init`.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Compile `excluded_paths` into a matcher.
    pub fn exclusion_matcher(&self) -> Result<GlobSet, ConfigError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.excluded_paths {
            let glob = Glob::new(pattern)
                .map_err(|e| ConfigError::Invalid(format!("excluded_paths: {}", e)))?;
            builder.add(glob);
        }
        builder
            .build()
            .map_err(|e| ConfigError::Invalid(format!("excluded_paths: {}", e)))
    }
}

/// Find a configuration file in `dir`, then in the user config directory.
pub fn discover(dir: &Path) -> Option<PathBuf> {
    DEFAULT_CONFIG_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
        .or_else(|| user_config_path().filter(|path| path.is_file()))
}

/// Per-user configuration file (e.g. ~/.config/companion/companion.yaml).
pub fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "companion").map(|dirs| dirs.config_dir().join("companion.yaml"))
}

/// Validate a configuration after loading.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    config.thresholds.validate().map_err(ConfigError::Invalid)?;
    config.exclusion_matcher()?;
    Ok(())
}
