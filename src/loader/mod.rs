//! Classifier artifact loading
//!
//! The artifact is a single ONNX file carrying both architecture and
//! weights. tract parses it, pins the input to `f32 [1, 28, 28, 1]`,
//! optimizes it and builds a runnable plan. A warm-up inference on a blank
//! tensor then checks that the model really produces ten class scores.

mod detect;

pub use detect::{detect_artifact, ArtifactFormat, ArtifactSource, ARTIFACT_FILE_NAMES};

use std::path::Path;

use tract_onnx::prelude::*;

use crate::canonical::{CanonicalTensor, TENSOR_SHAPE};
use crate::engine::{Classifier, OnnxClassifier, Prediction};
use crate::error::LoadError;

/// Load a classifier from a file or directory path
pub fn load_classifier<P: AsRef<Path>>(path: P) -> Result<OnnxClassifier, LoadError> {
    let source = detect_artifact(path)?;

    match source.format {
        ArtifactFormat::Onnx => load_onnx(&source),
    }
}

fn load_onnx(source: &ArtifactSource) -> Result<OnnxClassifier, LoadError> {
    let path = source.path.clone();
    let start = std::time::Instant::now();

    let model = tract_onnx::onnx()
        .model_for_path(&path)
        .map_err(|e| LoadError::Corrupt {
            path: path.clone(),
            reason: format!("{:#}", e),
        })?;

    let plan = model
        .with_input_fact(0, f32::fact(TENSOR_SHAPE).into())
        .and_then(|m| m.into_optimized())
        .and_then(|m| m.into_runnable())
        .map_err(|e| LoadError::Incompatible {
            path: path.clone(),
            reason: format!("{:#}", e),
        })?;

    let classifier = OnnxClassifier::new(plan, path);
    warmup(&classifier)?;

    tracing::debug!(
        "Loaded {} in {:.1}ms",
        classifier.path().display(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    Ok(classifier)
}

/// Run one inference on a blank canvas and validate the output shape.
fn warmup(classifier: &OnnxClassifier) -> Result<(), LoadError> {
    classifier
        .invoke(&CanonicalTensor::zeros())
        .and_then(Prediction::from_probabilities)
        .map(|_| ())
        .map_err(|e| LoadError::Incompatible {
            path: classifier.path().to_path_buf(),
            reason: format!("warm-up inference failed: {}", e),
        })
}
