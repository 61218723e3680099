//! Core data types for the energy dataset
//!
//! This module defines the two fundamental types of the dashboard:
//! - `EnergyRecord`: one (country, year) row of the source dataset
//! - `EnergyDataset`: the immutable collection loaded at startup

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single row of the energy dataset
///
/// One record per (country, year) pair. The source CSV carries many more
/// metric columns; only per-capita coal production is consumed here, and
/// the remaining columns are dropped at parse time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnergyRecord {
    /// Country (or region aggregate) name as it appears in the source
    pub country: String,
    /// Calendar year of the observation
    pub year: i32,
    /// Coal production per capita; None where the source cell is empty
    pub coal_prod_per_capita: Option<f64>,
}

impl EnergyRecord {
    /// Create a record with a known metric value
    pub fn new(country: impl Into<String>, year: i32, coal_prod_per_capita: f64) -> Self {
        Self {
            country: country.into(),
            year,
            coal_prod_per_capita: Some(coal_prod_per_capita),
        }
    }

    /// Create a record whose metric cell is empty
    pub fn missing(country: impl Into<String>, year: i32) -> Self {
        Self {
            country: country.into(),
            year,
            coal_prod_per_capita: None,
        }
    }
}

/// The in-memory energy dataset
///
/// Loaded once at startup and shared read-only for the lifetime of the
/// server. All access is by immutable projection; nothing mutates the rows
/// after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnergyDataset {
    records: Vec<EnergyRecord>,
}

impl EnergyDataset {
    /// Create a dataset from parsed records
    pub fn new(records: Vec<EnergyRecord>) -> Self {
        Self { records }
    }

    /// Number of rows in the dataset
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the dataset holds no rows
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All rows, in source order
    pub fn records(&self) -> &[EnergyRecord] {
        &self.records
    }

    /// Distinct country values, sorted by name
    ///
    /// This is the exact option set for the dashboard dropdown: every
    /// country present in the data appears once, and nothing else does.
    pub fn countries(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut countries: Vec<String> = self
            .records
            .iter()
            .filter(|r| seen.insert(r.country.as_str()))
            .map(|r| r.country.clone())
            .collect();
        countries.sort();
        countries
    }

    /// Rows whose country is a member of `selected`
    ///
    /// Pure set-membership test: the order of `selected` does not affect
    /// the result, and names absent from the dataset match nothing.
    pub fn filter_countries<'a>(&'a self, selected: &[String]) -> Vec<&'a EnergyRecord> {
        let wanted: HashSet<&str> = selected.iter().map(String::as_str).collect();
        self.records
            .iter()
            .filter(|r| wanted.contains(r.country.as_str()))
            .collect()
    }
}
