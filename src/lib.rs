//! Digitr - Handwritten digit classification server
//!
//! Digitr serves predictions from a pre-trained MNIST-style classifier
//! over HTTP. A client posts a base64 image (a canvas `data:` URL works
//! as-is); digitr canonicalizes it into the (1, 28, 28, 1) tensor the
//! classifier was trained on, runs the classifier and returns the digit,
//! its confidence and all ten class probabilities.
//!
//! # Architecture
//!
//! - **canonical**: base64/image decoding and the fixed preprocessing pipeline
//! - **engine**: classifier capability, tract executor, service state, argmax
//! - **loader**: artifact detection and ONNX loading
//! - **server**: axum routes and the error-to-status mapping
//!
//! # Example
//!
//! ```bash
//! # Start server
//! digitr serve --model mnist_model.onnx --port 8000
//!
//! # Classify one image
//! digitr predict --model mnist_model.onnx seven.png
//! ```

pub mod canonical;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod loader;
pub mod server;

// Re-export key types
pub use canonical::{canonicalize, CanonicalTensor};
pub use config::{DigitrConfig, ServerConfig};
pub use engine::{Classifier, OnnxClassifier, Prediction, ServiceState};
pub use error::{CanonicalizeError, InvocationError, LoadError, PredictError};
pub use loader::load_classifier;
