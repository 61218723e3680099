//! Dataset Loader
//!
//! One-time remote CSV fetch for the energy dataset.
//!
//! The loader runs exactly once, before the HTTP server binds its listener.
//! A transport error, a non-2xx response, or a CSV parse error all abort
//! startup; there is no retry and no fallback source.

use reqwest::Client;
use std::io::Read;
use std::time::Duration;

use super::error::DatasetResult;
use super::types::{EnergyDataset, EnergyRecord};

/// Default source: the public OWID global energy dataset
pub const DEFAULT_DATASET_URL: &str =
    "https://nyc3.digitaloceanspaces.com/owid-public/data/energy/owid-energy-data.csv";

/// Configuration for the dataset fetch
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    /// URL of the CSV resource
    pub url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATASET_URL.to_string(),
            request_timeout_ms: 60_000,
        }
    }
}

impl DatasetConfig {
    /// Create config for a custom source URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

/// Fetch the remote CSV and parse it into an [`EnergyDataset`]
pub async fn fetch_dataset(config: &DatasetConfig) -> DatasetResult<EnergyDataset> {
    let client = Client::builder()
        .timeout(Duration::from_millis(config.request_timeout_ms))
        .build()?;

    tracing::info!(url = %config.url, "Fetching energy dataset");

    let body = client
        .get(&config.url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    tracing::debug!(bytes = body.len(), "Dataset downloaded, parsing CSV");

    parse_csv_str(&body)
}

/// Parse CSV from any reader into an [`EnergyDataset`]
///
/// Rows deserialize by header name; columns other than `country`, `year`,
/// and `coal_prod_per_capita` are ignored. Empty metric cells become `None`.
/// Any malformed row aborts the parse.
pub fn parse_csv<R: Read>(reader: R) -> DatasetResult<EnergyDataset> {
    let mut csv_reader = csv::ReaderBuilder::new().from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.deserialize::<EnergyRecord>() {
        records.push(row?);
    }

    Ok(EnergyDataset::new(records))
}

/// Parse CSV from a string (useful for testing)
pub fn parse_csv_str(data: &str) -> DatasetResult<EnergyDataset> {
    parse_csv(data.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_consumes_only_known_columns() {
        let csv_data = "country,year,iso_code,coal_prod_per_capita,gdp
Canada,1900,CAN,1.25,100
Canada,1901,CAN,1.5,110
China,1900,CHN,0.4,90";

        let ds = parse_csv_str(csv_data).unwrap();

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.countries(), vec!["Canada", "China"]);
        assert_eq!(ds.records()[0].coal_prod_per_capita, Some(1.25));
    }

    #[test]
    fn test_parse_empty_cell_is_none() {
        let csv_data = "country,year,coal_prod_per_capita
Canada,1900,1.25
Canada,1901,
China,1900,0.4";

        let ds = parse_csv_str(csv_data).unwrap();

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.records()[1].coal_prod_per_capita, None);
    }

    #[test]
    fn test_parse_malformed_value_is_fatal() {
        let csv_data = "country,year,coal_prod_per_capita
Canada,1900,not-a-number";

        assert!(parse_csv_str(csv_data).is_err());
    }

    #[test]
    fn test_parse_header_only() {
        let ds = parse_csv_str("country,year,coal_prod_per_capita\n").unwrap();
        assert!(ds.is_empty());
    }
}
