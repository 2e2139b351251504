//! HTTP server for digit prediction
//!
//! `GET /`, `GET /health` and `POST /predict`.

mod error;
mod handlers;
mod routes;

use std::sync::Arc;

use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::engine::ServiceState;

pub use error::ErrorResponse;
pub use handlers::{AppState, HealthResponse, PredictRequest, RootResponse, ROOT_MESSAGE};
pub use routes::api_routes;

/// Build the application router with all configured layers
pub fn app(service: Arc<ServiceState>, config: &ServerConfig) -> Router {
    let state = Arc::new(AppState::new(service));

    let mut app = Router::new()
        .merge(api_routes(config.max_concurrent_requests))
        .layer(DefaultBodyLimit::max(config.max_body_size));

    if config.cors_enabled {
        app = app.layer(cors_layer(&config.cors_origins));
    }
    if config.request_logging {
        app = app.layer(TraceLayer::new_for_http());
    }

    app.with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Start the HTTP prediction server
pub async fn start(service: Arc<ServiceState>, config: ServerConfig) -> Result<()> {
    let app = app(service, &config);

    let addr = config.addr();
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("API endpoints:");
    tracing::info!("  GET  /        - Liveness");
    tracing::info!("  GET  /health  - Health check with model status");
    tracing::info!("  POST /predict - Classify a base64 digit image");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Received Ctrl+C, shutting down");
}
