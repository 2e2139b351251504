//! CLI commands

mod info;
mod predict;
mod serve;

pub use info::{info, inspect, ArtifactInfo};
pub use predict::predict;
pub use serve::serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Digitr - Handwritten digit classification server
#[derive(Parser)]
#[command(name = "digitr")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the prediction server
    Serve {
        /// Path to the .onnx artifact or a directory containing one
        /// (default: $DIGITR_MODEL_PATH, then config, then ./mnist_model.onnx)
        #[arg(long, short)]
        model: Option<PathBuf>,

        /// YAML or JSON config file
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Port to listen on (overrides config)
        #[arg(long)]
        port: Option<u16>,

        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,
    },

    /// Classify a single image file
    Predict {
        /// Path to the .onnx artifact or a directory containing one
        #[arg(long, short)]
        model: Option<PathBuf>,

        /// Image file (PNG, JPEG, ...)
        image: PathBuf,
    },

    /// Show classifier artifact information
    Info {
        /// Path to the .onnx artifact or a directory containing one
        #[arg(long, short)]
        model: Option<PathBuf>,
    },
}
