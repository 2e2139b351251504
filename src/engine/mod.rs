//! Core inference engine
//!
//! This module provides the prediction pipeline:
//! - Classifier: capability to score a canonical tensor
//! - OnnxClassifier: tract-backed implementation
//! - ServiceState: owns the (at most one) loaded classifier
//! - Prediction: argmax over the classifier output

mod executor;
mod prediction;
mod state;

pub use executor::OnnxClassifier;
pub use prediction::{Prediction, NUM_CLASSES};
pub use state::ServiceState;

use crate::canonical::CanonicalTensor;
use crate::error::InvocationError;

/// A trained digit classifier.
///
/// Implementations must be safe to call from many requests at once.
pub trait Classifier: Send + Sync {
    /// Score a canonical tensor, one probability per digit class.
    fn invoke(&self, tensor: &CanonicalTensor) -> Result<Vec<f32>, InvocationError>;

    /// Human-readable identifier used in logs.
    fn name(&self) -> String {
        "classifier".to_string()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::{mpsc, Mutex};

    use super::*;

    /// Returns the same probabilities for every input.
    pub struct FixedClassifier {
        pub probabilities: Vec<f32>,
        last_input: Mutex<Option<CanonicalTensor>>,
    }

    impl FixedClassifier {
        pub fn new(probabilities: Vec<f32>) -> Self {
            Self {
                probabilities,
                last_input: Mutex::new(None),
            }
        }

        pub fn one_hot(digit: usize) -> Self {
            let mut probabilities = vec![0.0; NUM_CLASSES];
            probabilities[digit] = 1.0;
            Self::new(probabilities)
        }

        pub fn last_input(&self) -> Option<CanonicalTensor> {
            self.last_input.lock().unwrap().clone()
        }
    }

    impl Classifier for FixedClassifier {
        fn invoke(&self, tensor: &CanonicalTensor) -> Result<Vec<f32>, InvocationError> {
            *self.last_input.lock().unwrap() = Some(tensor.clone());
            Ok(self.probabilities.clone())
        }
    }

    /// Always fails inside the runtime.
    pub struct FailingClassifier;

    impl Classifier for FailingClassifier {
        fn invoke(&self, _tensor: &CanonicalTensor) -> Result<Vec<f32>, InvocationError> {
            Err(InvocationError::Runtime("numeric overflow in dense_1".to_string()))
        }
    }

    /// Blocks inside `invoke` until the test releases it.
    pub struct GatedClassifier {
        digit: usize,
        entered: Mutex<mpsc::Sender<()>>,
        release: Mutex<mpsc::Receiver<()>>,
    }

    impl GatedClassifier {
        /// Returns the classifier, a receiver signalled when `invoke` starts,
        /// and a sender that lets one `invoke` finish.
        pub fn new(digit: usize) -> (Self, mpsc::Receiver<()>, mpsc::Sender<()>) {
            let (entered_tx, entered_rx) = mpsc::channel();
            let (release_tx, release_rx) = mpsc::channel();
            let classifier = Self {
                digit,
                entered: Mutex::new(entered_tx),
                release: Mutex::new(release_rx),
            };
            (classifier, entered_rx, release_tx)
        }
    }

    impl Classifier for GatedClassifier {
        fn invoke(&self, _tensor: &CanonicalTensor) -> Result<Vec<f32>, InvocationError> {
            let _ = self.entered.lock().unwrap().send(());
            let _ = self.release.lock().unwrap().recv();
            Ok(FixedClassifier::one_hot(self.digit).probabilities)
        }
    }
}
