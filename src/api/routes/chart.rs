//! Chart Route
//!
//! The server side of the dashboard's reactive binding.
//!
//! - POST /api/v1/chart - Figure for the current dropdown selection

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::ChartRequest;
use crate::api::state::AppState;
use crate::chart::{coal_production_figure, Figure};

/// POST /api/v1/chart
///
/// Rebuild the coal production figure for the selected countries.
/// Invoked once per change to the dropdown value; an empty or unknown
/// selection yields an empty figure, never an error.
pub async fn update_chart(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChartRequest>,
) -> Json<Figure> {
    let figure = coal_production_figure(&state.dataset, &req.countries);

    tracing::debug!(
        selected = req.countries.len(),
        traces = figure.trace_count(),
        "Rebuilt coal production figure"
    );

    Json(figure)
}
