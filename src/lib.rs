//! # Coalboard
//!
//! Interactive web dashboard for per-capita coal production, backed by the
//! OWID global energy dataset.
//!
//! At startup the public energy CSV is fetched once into an immutable
//! in-memory dataset. The server then renders a dashboard page with a
//! multi-select country dropdown; each change to the selection re-requests
//! a line-chart figure of `coal_prod_per_capita` over time for the selected
//! countries.
//!
//! ## Modules
//!
//! - [`dataset`]: Remote CSV loading and the in-memory dataset
//! - [`chart`]: Figure object model and the chart update handler
//! - [`api`]: HTTP server and dashboard page, built with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coalboard::api::{serve, ApiConfig, AppState};
//! use coalboard::dataset::{fetch_dataset, DatasetConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Fetch the dataset once; a failure here is fatal
//!     let dataset = Arc::new(fetch_dataset(&DatasetConfig::default()).await?);
//!
//!     // Serve the dashboard
//!     let config = ApiConfig::default();
//!     let state = AppState::new(dataset, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod chart;
pub mod dataset;

// Re-export top-level types for convenience
pub use api::{build_router, serve, ApiConfig, ApiError, ApiResult, AppState};

pub use chart::{coal_production_figure, Axis, Figure, Layout, Title, Trace};

pub use dataset::{
    fetch_dataset, parse_csv, parse_csv_str, DatasetConfig, DatasetError, DatasetResult,
    EnergyDataset, EnergyRecord,
};
