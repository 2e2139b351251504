//! Artifact format and location detection

use std::path::{Path, PathBuf};

use crate::error::LoadError;

/// File names searched, in order, when the artifact path is a directory.
pub const ARTIFACT_FILE_NAMES: &[&str] = &["mnist_model.onnx", "model.onnx"];

/// Detected artifact format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFormat {
    /// ONNX protobuf (architecture and weights in one file)
    Onnx,
}

/// Resolved artifact on disk
#[derive(Debug, Clone)]
pub struct ArtifactSource {
    pub path: PathBuf,
    pub format: ArtifactFormat,
}

/// Detect the artifact format and file from a path
///
/// The path can be:
/// - A direct path to a .onnx file
/// - A directory containing `mnist_model.onnx` or `model.onnx`
pub fn detect_artifact<P: AsRef<Path>>(path: P) -> Result<ArtifactSource, LoadError> {
    let path = path.as_ref();

    if path.is_file() {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext {
            "onnx" => Ok(ArtifactSource {
                path: path.to_path_buf(),
                format: ArtifactFormat::Onnx,
            }),
            "" => Err(LoadError::UnsupportedFormat(format!(
                "{} has no file extension",
                path.display()
            ))),
            other => Err(LoadError::UnsupportedFormat(format!(".{}", other))),
        }
    } else if path.is_dir() {
        ARTIFACT_FILE_NAMES
            .iter()
            .map(|name| path.join(name))
            .find(|candidate| candidate.is_file())
            .map(|path| ArtifactSource {
                path,
                format: ArtifactFormat::Onnx,
            })
            .ok_or_else(|| LoadError::Missing(path.join(ARTIFACT_FILE_NAMES[0])))
    } else {
        Err(LoadError::Missing(path.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_direct_onnx_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("digits.onnx");
        fs::write(&file, b"").unwrap();

        let source = detect_artifact(&file).unwrap();
        assert_eq!(source.format, ArtifactFormat::Onnx);
        assert_eq!(source.path, file);
    }

    #[test]
    fn test_directory_prefers_mnist_model() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("model.onnx"), b"").unwrap();
        fs::write(dir.path().join("mnist_model.onnx"), b"").unwrap();

        let source = detect_artifact(dir.path()).unwrap();
        assert_eq!(source.path, dir.path().join("mnist_model.onnx"));
    }

    #[test]
    fn test_directory_falls_back_to_model_onnx() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("model.onnx"), b"").unwrap();

        let source = detect_artifact(dir.path()).unwrap();
        assert_eq!(source.path, dir.path().join("model.onnx"));
    }

    #[test]
    fn test_empty_directory_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = detect_artifact(dir.path()).unwrap_err();
        assert!(matches!(err, LoadError::Missing(_)));
    }

    #[test]
    fn test_keras_file_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("mnist_model.h5");
        fs::write(&file, b"HDF").unwrap();

        let err = detect_artifact(&file).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat(ext) if ext == ".h5"));
    }

    #[test]
    fn test_nonexistent_path_is_missing() {
        let err = detect_artifact("/definitely/not/here.onnx").unwrap_err();
        assert!(matches!(err, LoadError::Missing(_)));
    }
}
