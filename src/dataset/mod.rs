//! Energy Dataset
//!
//! This module provides the in-memory dataset backing the dashboard:
//!
//! - **types**: Core data structures (EnergyRecord, EnergyDataset)
//! - **loader**: One-time remote CSV fetch and parsing
//! - **error**: Error types
//!
//! # Lifecycle
//!
//! ```text
//! Startup:
//!   HTTPS GET → CSV parse → EnergyDataset (immutable, Arc-shared)
//!
//! Per request:
//!   selection → set-membership filter → read-only projection
//! ```
//!
//! The dataset is loaded exactly once, before the server starts accepting
//! connections. A fetch or parse failure is fatal: there is no retry and no
//! fallback source. After startup the dataset is never mutated, so handlers
//! across concurrent sessions share it without synchronization.

pub mod error;
pub mod loader;
pub mod types;

// Re-export commonly used types
pub use error::{DatasetError, DatasetResult};
pub use loader::{fetch_dataset, parse_csv, parse_csv_str, DatasetConfig};
pub use types::{EnergyDataset, EnergyRecord};
