//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.
//! The chart endpoint's response body is [`crate::chart::Figure`] itself.

use serde::{Deserialize, Serialize};

// ============================================
// CHART DTOs
// ============================================

/// Chart update request: the current dropdown selection
#[derive(Debug, Deserialize)]
pub struct ChartRequest {
    /// Selected country names; may be empty or contain unknown names
    #[serde(default)]
    pub countries: Vec<String>,
}

// ============================================
// COUNTRY DTOs
// ============================================

/// Dropdown option set
#[derive(Debug, Serialize)]
pub struct CountryOptionsResponse {
    /// Number of distinct countries
    pub total: usize,
    /// Distinct country names present in the dataset
    pub countries: Vec<String>,
    /// Countries the dashboard preselects on first load
    pub default_selection: Vec<String>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: "healthy" or "degraded"
    pub status: String,
    /// Dataset status: "ok" or "empty"
    pub dataset: String,
    /// Number of rows in the loaded dataset
    pub rows: usize,
    /// Number of distinct countries
    pub countries: usize,
    /// Seconds since the server started
    pub uptime_seconds: u64,
    /// Crate version
    pub version: String,
}
