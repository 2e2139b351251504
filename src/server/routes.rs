//! Route definitions

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower::limit::GlobalConcurrencyLimitLayer;

use super::handlers::{health, predict, root, AppState};

/// Create the API router
///
/// At most `max_concurrent_predictions` predictions run at once; further
/// ones wait for a slot. Liveness and health never wait.
pub fn api_routes(max_concurrent_predictions: usize) -> Router<Arc<AppState>> {
    let predict_limit = GlobalConcurrencyLimitLayer::new(max_concurrent_predictions.max(1));

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/predict", post(predict).layer(predict_limit))
}
