//! Mapping of prediction failures to HTTP responses

use axum::{
    extract::{rejection::JsonRejection, Json},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::PredictError;

/// Error body: `{"detail": "..."}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    pub fn with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

impl PredictError {
    /// HTTP status for this failure kind.
    pub fn status_code(&self) -> StatusCode {
        match self {
            PredictError::ModelNotLoaded => StatusCode::SERVICE_UNAVAILABLE,
            PredictError::Image(_) => StatusCode::BAD_REQUEST,
            PredictError::Invocation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PredictError {
    fn into_response(self) -> Response {
        ErrorResponse::new(self.to_string()).with_status(self.status_code())
    }
}

/// Malformed request body (bad JSON, missing `image`, wrong content type).
pub fn rejection_response(rejection: JsonRejection) -> Response {
    ErrorResponse::new(rejection.body_text()).with_status(rejection.status())
}
