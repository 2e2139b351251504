use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use digitr::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "digitr=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            model,
            config,
            port,
            host,
        } => {
            digitr::cli::serve(model, config, port, host).await?;
        }
        Commands::Predict { model, image } => {
            digitr::cli::predict(model, image).await?;
        }
        Commands::Info { model } => {
            digitr::cli::info(model).await?;
        }
    }

    Ok(())
}
