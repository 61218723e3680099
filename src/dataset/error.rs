//! Dataset error types
//!
//! Defines all errors that can occur while loading the energy dataset.
//! Every variant is startup-fatal: the process must not serve requests
//! without a dataset.

use thiserror::Error;

/// Errors that can occur while fetching or parsing the dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Remote fetch failed (transport error or non-2xx status)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// CSV parsing or row deserialization failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
