//! Configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::colleague::{COLLEAGUE_ONE, COLLEAGUE_TWO};
use crate::output::OutputFormat;

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Labels the colleagues report under
    pub labels: LabelsConfig,

    /// Messages sent by the demo
    pub demo: DemoConfig,

    /// Console output
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Project-local: .mediate.yml
        let local_config = PathBuf::from(".mediate.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // User: ~/.config/mediate/mediate.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("mediate").join("mediate.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Render as YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize config")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelsConfig {
    pub first: String,
    pub second: String,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            first: COLLEAGUE_ONE.to_string(),
            second: COLLEAGUE_TWO.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Sent by the first colleague
    #[serde(rename = "first-message")]
    pub first_message: String,

    /// Sent by the second colleague
    #[serde(rename = "second-message")]
    pub second_message: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            first_message: "eat rice".to_string(),
            second_message: "you're treating".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}
