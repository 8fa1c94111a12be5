//! mip-dash - Marketing Intelligence dashboard service
//!
//! Loads the eight CSV exports once at startup and serves the dashboard UI
//! and its JSON API. A load failure reports the required-file list and
//! exits without serving.

use anyhow::Result;
use clap::Parser;
use mip_common::config::{resolve_data_folder, resolve_port, TomlConfig};
use tracing::{error, info};

use mip_dash::data::{load_dataset, REQUIRED_FILES};
use mip_dash::{build_router, AppState};

#[derive(Debug, Parser)]
#[command(name = "mip-dash", about = "Marketing Intelligence dashboard")]
struct Args {
    /// Folder containing the input CSV files
    #[arg(long)]
    data_folder: Option<String>,

    /// HTTP listen port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting MIP Dashboard (mip-dash) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    // Resolve data folder and port: CLI > env > TOML config > default
    let toml_config = TomlConfig::load();
    let data_folder = resolve_data_folder(args.data_folder.as_deref(), &toml_config);
    let port = resolve_port(args.port, &toml_config);
    info!("Data folder: {}", data_folder.display());

    // Load the dataset once; held immutably for the process lifetime
    let dataset = match load_dataset(&data_folder) {
        Ok(dataset) => {
            info!("✓ Dataset loaded");
            dataset
        }
        Err(e) => {
            error!("Failed to load dataset: {}", e);
            error!(
                "Required files in {}: {}",
                data_folder.display(),
                REQUIRED_FILES.join(", ")
            );
            return Err(e.into());
        }
    };

    // Create application state and router
    let state = AppState::new(dataset);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
    info!("mip-dash listening on http://127.0.0.1:{}", port);
    info!("Health check: http://127.0.0.1:{}/health", port);

    axum::serve(listener, app).await?;

    Ok(())
}
