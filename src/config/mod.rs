//! Configuration system for digitr
//!
//! Every field has a default, so an empty file (or no file) is valid.

mod model;
mod server;

pub use model::{ModelConfig, DEFAULT_MODEL_PATH, MODEL_PATH_ENV};
pub use server::ServerConfig;

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Digitr configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DigitrConfig {
    /// Classifier artifact settings
    #[serde(default)]
    pub model: ModelConfig,

    /// Server settings (only for `digitr serve`)
    #[serde(default)]
    pub server: ServerConfig,
}

impl DigitrConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration, picking the parser from the file extension
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(path),
            Some("json") => Self::from_json(path),
            _ => Err(anyhow!(
                "unsupported config file {}: expected .yaml, .yml or .json",
                path.display()
            )),
        }
    }

    /// Artifact path: CLI flag, then `DIGITR_MODEL_PATH`, then config.
    pub fn model_path(&self, flag: Option<PathBuf>) -> PathBuf {
        self.model_path_with(flag, std::env::var(MODEL_PATH_ENV).ok())
    }

    fn model_path_with(&self, flag: Option<PathBuf>, env: Option<String>) -> PathBuf {
        flag.or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| self.model.path.clone())
    }
}
