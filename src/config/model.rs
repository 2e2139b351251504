//! Classifier artifact settings

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Well-known artifact location, relative to the working directory.
pub const DEFAULT_MODEL_PATH: &str = "mnist_model.onnx";

/// Environment variable overriding the configured artifact path.
pub const MODEL_PATH_ENV: &str = "DIGITR_MODEL_PATH";

/// Where to find the classifier artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Path to an .onnx file or a directory containing one
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

fn default_path() -> PathBuf {
    PathBuf::from(DEFAULT_MODEL_PATH)
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
