//! Coalboard Dashboard Server
//!
//! Run with: cargo run
//!
//! # Configuration
//!
//! Defaults live in source; environment variables override them:
//! - `COALBOARD_HOST`: Host to bind to (default: 0.0.0.0)
//! - `COALBOARD_PORT`: Port to listen on (default: 8050)
//! - `COALBOARD_DATASET_URL`: CSV source URL (default: the OWID energy dataset)
//! - `RUST_LOG`: Log filter (default derived from the `DEBUG` constant)

use anyhow::Context;
use coalboard::api::{serve, ApiConfig, AppState};
use coalboard::dataset::{fetch_dataset, DatasetConfig};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Verbose logging toggle, flipped in source
const DEBUG: bool = true;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting coalboard v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration from environment
    let api_config = load_api_config();
    let dataset_config = load_dataset_config();

    // One-time dataset load; any failure here aborts startup
    let dataset = fetch_dataset(&dataset_config)
        .await
        .context("failed to load the energy dataset")?;

    tracing::info!(
        rows = dataset.len(),
        countries = dataset.countries().len(),
        "Energy dataset loaded"
    );

    // Run server
    let state = AppState::new(Arc::new(dataset), api_config.clone());
    serve(state, &api_config).await?;

    tracing::info!("Coalboard stopped");
    Ok(())
}

/// Default log filter derived from the in-source debug flag
fn default_log_filter() -> &'static str {
    if DEBUG {
        "coalboard=debug,tower_http=debug"
    } else {
        "coalboard=info"
    }
}

/// Load API configuration from environment
fn load_api_config() -> ApiConfig {
    let host = std::env::var("COALBOARD_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

    let port = std::env::var("COALBOARD_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8050);

    ApiConfig {
        host,
        port,
        ..Default::default()
    }
}

/// Load dataset configuration from environment
fn load_dataset_config() -> DatasetConfig {
    match std::env::var("COALBOARD_DATASET_URL") {
        Ok(url) => DatasetConfig::new(url),
        Err(_) => DatasetConfig::default(),
    }
}
