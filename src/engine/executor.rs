//! ONNX classifier executor
//!
//! Runs a tract plan over canonical tensors.

use std::fmt;
use std::path::{Path, PathBuf};

use tract_onnx::prelude::*;

use super::Classifier;
use crate::canonical::{CanonicalTensor, TENSOR_SHAPE};
use crate::error::InvocationError;

type Plan = TypedRunnableModel<TypedModel>;

/// Classifier backed by an optimized tract plan.
pub struct OnnxClassifier {
    plan: Plan,
    path: PathBuf,
}

impl OnnxClassifier {
    pub(crate) fn new(plan: Plan, path: PathBuf) -> Self {
        Self { plan, path }
    }

    /// Artifact this classifier was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Debug for OnnxClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnnxClassifier")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl Classifier for OnnxClassifier {
    fn invoke(&self, tensor: &CanonicalTensor) -> Result<Vec<f32>, InvocationError> {
        let input = Tensor::from_shape(&TENSOR_SHAPE, tensor.as_slice()).map_err(runtime)?;
        let outputs = self.plan.run(tvec!(input.into())).map_err(runtime)?;

        let output = outputs
            .first()
            .ok_or_else(|| InvocationError::Runtime("model produced no outputs".to_string()))?;
        let view = output.to_array_view::<f32>().map_err(runtime)?;

        Ok(view.iter().copied().collect())
    }

    fn name(&self) -> String {
        self.path.display().to_string()
    }
}

fn runtime(e: impl std::fmt::Display) -> InvocationError {
    InvocationError::Runtime(format!("{:#}", e))
}
