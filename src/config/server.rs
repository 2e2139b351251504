//! HTTP listener settings for `digitr serve`

use serde::{Deserialize, Serialize};

/// Port the prediction API has always listened on.
pub const DEFAULT_PORT: u16 = 8000;

/// Request bodies carry one base64 image; larger uploads are refused.
pub const DEFAULT_MAX_BODY_SIZE: usize = 10 * 1024 * 1024;

/// Listener, CORS and admission settings for the prediction API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,

    /// Interface to bind; the default accepts connections from anywhere
    pub host: String,

    /// Predictions allowed to run at once. Extra `POST /predict` calls wait
    /// for a slot; `/` and `/health` are never held back. Zero acts as one.
    pub max_concurrent_requests: usize,

    /// Send CORS headers so browser canvases on other origins can post
    pub cors_enabled: bool,

    /// Origins echoed back in `access-control-allow-origin`; empty allows any
    pub cors_origins: Vec<String>,

    /// Per-request trace spans
    pub request_logging: bool,

    /// Upper bound on a `/predict` body, in bytes
    pub max_body_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: "0.0.0.0".to_string(),
            max_concurrent_requests: 16,
            cors_enabled: true,
            cors_origins: Vec::new(),
            request_logging: true,
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        }
    }
}

impl ServerConfig {
    /// `host:port` for the listener
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
