//! Prediction result and argmax selection

use serde::{Deserialize, Serialize};

use crate::error::InvocationError;

/// Number of digit classes the classifier scores.
pub const NUM_CLASSES: usize = 10;

/// Response payload for a successful prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub predicted_digit: usize,
    pub confidence: f32,
    pub probabilities: Vec<f32>,
}

impl Prediction {
    /// Select the most probable digit from a raw classifier output.
    ///
    /// Ties resolve to the lowest index. The output must hold exactly
    /// `NUM_CLASSES` finite values.
    pub fn from_probabilities(probabilities: Vec<f32>) -> Result<Self, InvocationError> {
        if probabilities.len() != NUM_CLASSES {
            return Err(InvocationError::OutputShape {
                expected: NUM_CLASSES,
                actual: probabilities.len(),
            });
        }
        if let Some(index) = probabilities.iter().position(|p| !p.is_finite()) {
            return Err(InvocationError::NonFinite { index });
        }

        let mut predicted_digit = 0;
        for (i, &p) in probabilities.iter().enumerate().skip(1) {
            if p > probabilities[predicted_digit] {
                predicted_digit = i;
            }
        }

        Ok(Self {
            predicted_digit,
            confidence: probabilities[predicted_digit],
            probabilities,
        })
    }
}
