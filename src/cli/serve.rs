//! HTTP server command

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use crate::config::DigitrConfig;
use crate::engine::ServiceState;
use crate::server;

/// Start the prediction server
pub async fn serve(
    model: Option<PathBuf>,
    config: Option<PathBuf>,
    port: Option<u16>,
    host: Option<String>,
) -> Result<()> {
    let config = match config {
        Some(path) => DigitrConfig::from_file(path)?,
        None => DigitrConfig::default(),
    };

    let mut server_config = config.server.clone();
    if let Some(port) = port {
        server_config.port = port;
    }
    if let Some(host) = host {
        server_config.host = host;
    }

    // Best-effort load: the server comes up either way
    let state = Arc::new(ServiceState::new());
    let model_path = config.model_path(model);
    if !state.startup(&model_path) {
        tracing::warn!("Serving without a classifier; /predict will return 503");
    }

    server::start(state, server_config).await?;

    Ok(())
}
