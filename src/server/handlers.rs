//! HTTP request handlers

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use super::error::rejection_response;
use crate::engine::ServiceState;
use crate::error::{InvocationError, PredictError};

/// Liveness message returned by `GET /`
pub const ROOT_MESSAGE: &str = "MNIST Digit Classifier API is running";

/// Shared application state
pub struct AppState {
    pub service: Arc<ServiceState>,
}

impl AppState {
    pub fn new(service: Arc<ServiceState>) -> Self {
        Self { service }
    }
}

/// Liveness endpoint
pub async fn root() -> impl IntoResponse {
    Json(RootResponse {
        message: ROOT_MESSAGE.to_string(),
    })
}

/// Health check endpoint
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        model_loaded: state.service.is_loaded(),
    })
}

/// Digit prediction endpoint
pub async fn predict(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!("Rejected predict request: {}", rejection.body_text());
            return rejection_response(rejection);
        }
    };

    // Decode, resize and inference are CPU-bound
    let service = Arc::clone(&state.service);
    let result = tokio::task::spawn_blocking(move || service.predict(&request.image))
        .await
        .unwrap_or_else(|e| Err(PredictError::from(InvocationError::from(e))));

    match result {
        Ok(prediction) => {
            tracing::info!(
                "Predicted digit: {}, Confidence: {:.4}",
                prediction.predicted_digit,
                prediction.confidence
            );
            (StatusCode::OK, Json(prediction)).into_response()
        }
        Err(e) => {
            match &e {
                PredictError::ModelNotLoaded => tracing::warn!("Prediction refused: {}", e),
                PredictError::Image(_) => tracing::warn!("Bad image: {}", e),
                PredictError::Invocation(_) => tracing::error!("Prediction error: {}", e),
            }
            e.into_response()
        }
    }
}

// Request/Response types

#[derive(Debug, Serialize, Deserialize)]
pub struct PredictRequest {
    /// Base64 image, optionally a `data:image/...;base64,` URL
    pub image: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_loaded: bool,
}
