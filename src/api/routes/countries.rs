//! Country Routes
//!
//! Dropdown option data for the dashboard.
//!
//! - GET /api/v1/countries - Distinct countries plus the default selection

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::CountryOptionsResponse;
use crate::api::state::AppState;

/// GET /api/v1/countries
///
/// The exact set of distinct country values in the loaded dataset,
/// plus the configured default selection. The defaults are not validated
/// against the option set.
pub async fn list_countries(State(state): State<Arc<AppState>>) -> Json<CountryOptionsResponse> {
    let countries = state.dataset.countries();

    Json(CountryOptionsResponse {
        total: countries.len(),
        countries,
        default_selection: state.config.default_selection.clone(),
    })
}
