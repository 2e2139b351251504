//! Service state: the single loaded classifier
//!
//! Starts absent, becomes loaded at most once, never goes back.

use std::path::Path;
use std::sync::{Arc, OnceLock};

use super::{Classifier, Prediction};
use crate::canonical::{self, CanonicalTensor};
use crate::error::PredictError;
use crate::loader;

/// Owner of the loaded classifier, shared with request handlers.
#[derive(Default)]
pub struct ServiceState {
    classifier: OnceLock<Arc<dyn Classifier>>,
}

impl ServiceState {
    /// New state with no classifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// State that is already loaded with `classifier`.
    pub fn with_classifier(classifier: Arc<dyn Classifier>) -> Self {
        let state = Self::new();
        state.install(classifier);
        state
    }

    /// Load the artifact at `path` and install it.
    ///
    /// Failures are logged and leave the state absent; the caller keeps
    /// running so health checks can report it. Returns whether a classifier
    /// is loaded afterwards.
    pub fn startup(&self, path: &Path) -> bool {
        if self.is_loaded() {
            tracing::warn!("Classifier already loaded; skipping startup load");
            return true;
        }

        tracing::info!("Loading classifier from {}", path.display());
        match loader::load_classifier(path) {
            Ok(classifier) => {
                self.install(Arc::new(classifier));
                tracing::info!("Classifier loaded successfully");
            }
            Err(e) => {
                tracing::error!("Failed to load classifier: {}", e);
                tracing::error!("Service will report model_loaded=false until restarted");
            }
        }

        self.is_loaded()
    }

    /// Install a classifier. Returns false if one was already installed.
    pub fn install(&self, classifier: Arc<dyn Classifier>) -> bool {
        let name = classifier.name();
        match self.classifier.set(classifier) {
            Ok(()) => {
                tracing::debug!("Installed classifier {}", name);
                true
            }
            Err(_) => {
                tracing::warn!("Ignoring classifier {}: one is already loaded", name);
                false
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.classifier.get().is_some()
    }

    pub fn classifier(&self) -> Option<&Arc<dyn Classifier>> {
        self.classifier.get()
    }

    /// Predict the digit in a transport-encoded image.
    pub fn predict(&self, encoded: &str) -> Result<Prediction, PredictError> {
        let classifier = self.classifier().ok_or(PredictError::ModelNotLoaded)?;
        let tensor = canonical::canonicalize(encoded)?;
        Self::classify(classifier.as_ref(), &tensor)
    }

    /// Predict the digit in raw image file bytes.
    pub fn predict_bytes(&self, bytes: &[u8]) -> Result<Prediction, PredictError> {
        let classifier = self.classifier().ok_or(PredictError::ModelNotLoaded)?;
        let tensor = canonical::canonicalize_bytes(bytes)?;
        Self::classify(classifier.as_ref(), &tensor)
    }

    fn classify(
        classifier: &dyn Classifier,
        tensor: &CanonicalTensor,
    ) -> Result<Prediction, PredictError> {
        let probabilities = classifier.invoke(tensor)?;
        Ok(Prediction::from_probabilities(probabilities)?)
    }
}
