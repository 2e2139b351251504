//! One-shot prediction command

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::DigitrConfig;
use crate::engine::ServiceState;
use crate::loader;

/// Classify one image file and print the prediction as JSON
pub async fn predict(model: Option<PathBuf>, image: PathBuf) -> Result<()> {
    let model_path = DigitrConfig::default().model_path(model);

    tracing::info!("Loading classifier: {}", model_path.display());
    let classifier = loader::load_classifier(&model_path)?;
    let state = ServiceState::with_classifier(Arc::new(classifier));

    let bytes = tokio::fs::read(&image)
        .await
        .with_context(|| format!("failed to read {}", image.display()))?;

    let prediction = state.predict_bytes(&bytes)?;
    println!("{}", serde_json::to_string_pretty(&prediction)?);

    Ok(())
}
