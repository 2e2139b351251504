//! Artifact info command

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::canonical::{CanonicalTensor, TENSOR_SHAPE};
use crate::config::DigitrConfig;
use crate::engine::Classifier;
use crate::loader::{self, detect_artifact, ArtifactFormat};

/// What `digitr info` reports about an artifact
#[derive(Debug)]
pub struct ArtifactInfo {
    pub path: PathBuf,
    pub format: ArtifactFormat,
    pub size_bytes: u64,
    pub output_classes: usize,
}

/// Show classifier artifact information
pub async fn info(model: Option<PathBuf>) -> Result<()> {
    let model_path = DigitrConfig::default().model_path(model);
    let info = inspect(&model_path).await?;

    println!("Artifact: {}", info.path.display());
    match info.format {
        ArtifactFormat::Onnx => println!("Format: ONNX"),
    }
    println!("Size: {:.2} KB", info.size_bytes as f64 / 1024.0);
    println!("Input: f32 {:?}", TENSOR_SHAPE);
    println!("Output classes: {}", info.output_classes);

    Ok(())
}

/// Locate, load and run the artifact once on a blank canvas
pub async fn inspect(model_path: &Path) -> Result<ArtifactInfo> {
    let source = detect_artifact(model_path)?;

    let size_bytes = tokio::fs::metadata(&source.path)
        .await
        .with_context(|| format!("Failed to stat {}", source.path.display()))?
        .len();

    let path = source.path.clone();
    let output_classes = tokio::task::spawn_blocking(move || -> Result<usize> {
        let classifier = loader::load_classifier(&path)?;
        Ok(classifier.invoke(&CanonicalTensor::zeros())?.len())
    })
    .await??;

    Ok(ArtifactInfo {
        path: source.path,
        format: source.format,
        size_bytes,
        output_classes,
    })
}
