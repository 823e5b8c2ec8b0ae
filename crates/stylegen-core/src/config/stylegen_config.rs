//! Top-level stylegen configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{DiscoveryConfig, OutputConfig, PromptDefaults};
use crate::errors::ConfigError;

/// Name of the optional project config file.
pub const CONFIG_FILE_NAME: &str = "stylegen.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Project config (`stylegen.toml` in the project root)
/// 2. Compiled defaults
///
/// No CLI or environment layers. Every run is a full rebuild of the project tree.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StylegenConfig {
    pub discovery: DiscoveryConfig,
    pub output: OutputConfig,
    pub defaults: PromptDefaults,
}

impl StylegenConfig {
    /// Load configuration for the project rooted at `root`.
    /// A missing `stylegen.toml` yields compiled defaults.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE_NAME);
        let config = if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|_| {
                ConfigError::FileNotFound {
                    path: path.display().to_string(),
                }
            })?;
            tracing::debug!(path = %path.display(), "loading project config");
            Self::parse(&content, &path.display().to_string())?
        } else {
            Self::default()
        };

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config = Self::parse(toml_str, "<string>")?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Unknown keys are silently ignored (forward-compatible).
    fn parse(content: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &StylegenConfig) -> Result<(), ConfigError> {
        if config.discovery.effective_themes_dir().trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "discovery.themes_dir".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        let page_file = config.discovery.effective_page_file();
        if page_file.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "discovery.page_file".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if page_file.contains('/') || page_file.contains('\\') {
            return Err(ConfigError::ValidationFailed {
                field: "discovery.page_file".to_string(),
                message: "must be a file name, not a path".to_string(),
            });
        }
        if config.output.effective_path().trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "output.path".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Absolute themes directory for the project rooted at `root`.
    pub fn themes_dir(&self, root: &Path) -> PathBuf {
        root.join(self.discovery.effective_themes_dir())
    }

    /// Absolute artifact path for the project rooted at `root`.
    pub fn output_path(&self, root: &Path) -> PathBuf {
        root.join(self.output.effective_path())
    }
}
