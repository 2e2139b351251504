//! Error kinds for the prediction pipeline
//!
//! Each failure a request can hit has exactly one variant here, and each
//! variant maps to exactly one HTTP status at the server boundary.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while turning a client payload into a canonical tensor.
#[derive(Debug, Error)]
pub enum CanonicalizeError {
    #[error("invalid base64 payload: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("cannot parse image: {0}")]
    Parse(#[from] image::ImageError),
}

/// Failure raised by the classifier on an otherwise valid tensor.
#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("inference runtime error: {0}")]
    Runtime(String),
    #[error("classifier returned {actual} values, expected {expected}")]
    OutputShape { expected: usize, actual: usize },
    #[error("classifier returned non-finite probability at index {index}")]
    NonFinite { index: usize },
    #[error("inference task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Everything `predict` can fail with.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("Model not loaded")]
    ModelNotLoaded,
    #[error("Error processing image: {0}")]
    Image(#[from] CanonicalizeError),
    #[error("Prediction failed: {0}")]
    Invocation(#[from] InvocationError),
}

/// Startup failure while loading the classifier artifact.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("model artifact not found: {}", .0.display())]
    Missing(PathBuf),
    #[error("unsupported model artifact format: {0}")]
    UnsupportedFormat(String),
    #[error("corrupt model artifact {}: {reason}", .path.display())]
    Corrupt { path: PathBuf, reason: String },
    #[error("incompatible model artifact {}: {reason}", .path.display())]
    Incompatible { path: PathBuf, reason: String },
}
