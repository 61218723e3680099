//! Line chart update handler
//!
//! The one piece of behavior in the system: given the current dropdown
//! selection, produce the per-capita coal production line chart. Pure
//! function over the immutable dataset; the hosting framework owns when it
//! is invoked, this code owns only the filter-and-plot computation.

use std::collections::BTreeMap;

use crate::dataset::EnergyDataset;

use super::figure::{Figure, Layout, Trace};

/// X axis label, matching the source column
const X_TITLE: &str = "year";
/// Y axis label, matching the source column
const Y_TITLE: &str = "coal_prod_per_capita";

/// Build the coal production figure for the selected countries
///
/// Filters the dataset to rows whose country is a member of `selected`
/// (set semantics; input order is irrelevant) and emits one line trace per
/// matching country that has at least one non-null metric value. Traces are
/// ordered by country name and points by year ascending, so the same
/// selection always yields the same figure.
///
/// An empty selection, or one matching no rows, yields a figure with zero
/// traces rather than an error.
pub fn coal_production_figure(dataset: &EnergyDataset, selected: &[String]) -> Figure {
    // BTreeMap keys give the deterministic trace order
    let mut series: BTreeMap<&str, Vec<(i32, Option<f64>)>> = BTreeMap::new();

    for record in dataset.filter_countries(selected) {
        series
            .entry(record.country.as_str())
            .or_default()
            .push((record.year, record.coal_prod_per_capita));
    }

    let mut data = Vec::with_capacity(series.len());
    for (country, mut points) in series {
        // A country whose metric is entirely absent plots no line
        if points.iter().all(|(_, value)| value.is_none()) {
            continue;
        }

        points.sort_by_key(|(year, _)| *year);

        let mut trace = Trace::line(country);
        for (year, value) in points {
            trace = trace.point(year, value);
        }
        data.push(trace);
    }

    Figure::new(data, Layout::new(X_TITLE, Y_TITLE))
}
