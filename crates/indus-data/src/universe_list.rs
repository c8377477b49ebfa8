//! Universe list loading from remote CSV sources.
//!
//! Each universe is published as a CSV file with at least a `Symbol` column.
//! Loading derives the exchange-qualified Yahoo symbol for every row and
//! memoizes the result per URL for the lifetime of the loader, which is
//! scoped to a single pipeline run.

use crate::error::{DataError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

/// Exchange suffix appended to raw NSE symbols for Yahoo lookups.
pub const NSE_SUFFIX: &str = ".NS";

/// One row of a universe list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolRecord {
    /// Raw symbol as published in the universe CSV.
    pub symbol: String,
    /// Exchange-qualified symbol (`symbol` + `.NS`).
    pub yahoo_symbol: String,
}

impl SymbolRecord {
    /// Create a record from a raw symbol, deriving the Yahoo symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        let symbol = symbol.into();
        let yahoo_symbol = format!("{symbol}{NSE_SUFFIX}");
        Self {
            symbol,
            yahoo_symbol,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Symbol")]
    symbol: String,
}

/// Parse universe CSV content into symbol records.
///
/// # Errors
/// Returns `DataError::Csv` when the content is not valid CSV or lacks a
/// `Symbol` column.
pub fn parse_symbol_csv(text: &str) -> Result<Vec<SymbolRecord>> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let mut records = Vec::new();
    for row in reader.deserialize::<RawRow>() {
        let row = row?;
        records.push(SymbolRecord::new(row.symbol.trim()));
    }
    Ok(records)
}

/// Loader for universe lists with per-URL memoization.
#[derive(Debug)]
pub struct UniverseListLoader {
    client: reqwest::Client,
    cache: HashMap<String, Vec<SymbolRecord>>,
}

impl UniverseListLoader {
    /// Create a new loader.
    ///
    /// # Errors
    /// Returns `DataError::Network` if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(DataError::Network)?;

        Ok(Self {
            client,
            cache: HashMap::new(),
        })
    }

    /// Load the universe list at `url`, memoized per distinct URL.
    ///
    /// # Errors
    /// Returns `DataError` when the fetch or the CSV parse fails; the cache
    /// is left untouched in that case.
    pub async fn load(&mut self, url: &str) -> Result<Vec<SymbolRecord>> {
        if let Some(hit) = self.cache.get(url) {
            return Ok(hit.clone());
        }

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(DataError::Network)?;

        if !response.status().is_success() {
            return Err(DataError::Http(format!(
                "Failed to fetch universe list from {url}: HTTP {}",
                response.status()
            )));
        }

        let body = response.text().await.map_err(DataError::Network)?;
        let records = parse_symbol_csv(&body)?;

        self.cache.insert(url.to_string(), records.clone());
        Ok(records)
    }

    /// Drop all memoized lists, forcing the next load to re-fetch.
    pub fn invalidate(&mut self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_record_qualification() {
        let record = SymbolRecord::new("RELIANCE");
        assert_eq!(record.symbol, "RELIANCE");
        assert_eq!(record.yahoo_symbol, "RELIANCE.NS");
    }

    #[test]
    fn test_parse_symbol_csv() {
        let csv = "Company Name,Industry,Symbol,Series,ISIN Code\n\
                   Reliance Industries Ltd.,Oil & Gas,RELIANCE,EQ,INE002A01018\n\
                   Tata Consultancy Services Ltd.,IT,TCS,EQ,INE467B01029\n";

        let records = parse_symbol_csv(csv).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].symbol, "RELIANCE");
        assert_eq!(records[0].yahoo_symbol, "RELIANCE.NS");
        assert_eq!(records[1].yahoo_symbol, "TCS.NS");
    }

    #[test]
    fn test_parse_symbol_csv_every_row_qualified() {
        let csv = "Symbol\nRELIANCE\nTCS\nINFY\nHDFCBANK\n";
        let records = parse_symbol_csv(csv).unwrap();

        assert_eq!(records.len(), 4);
        for record in &records {
            assert_eq!(
                record.yahoo_symbol,
                format!("{}{}", record.symbol, NSE_SUFFIX)
            );
        }
    }

    #[test]
    fn test_parse_symbol_csv_missing_column() {
        let csv = "Ticker,Name\nRELIANCE,Reliance Industries\n";
        let result = parse_symbol_csv(csv);
        assert!(matches!(result, Err(DataError::Csv(_))));
    }

    #[test]
    fn test_parse_symbol_csv_empty() {
        let records = parse_symbol_csv("").unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_load_returns_memoized_list() {
        let mut loader = UniverseListLoader::new().unwrap();
        let url = "https://example.invalid/universe.csv";

        loader.cache.insert(
            url.to_string(),
            vec![SymbolRecord::new("RELIANCE"), SymbolRecord::new("TCS")],
        );

        // Served from the memo; the unreachable host is never contacted.
        let records = loader.load(url).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].yahoo_symbol, "RELIANCE.NS");
    }

    #[tokio::test]
    async fn test_invalidate_clears_memo() {
        let mut loader = UniverseListLoader::new().unwrap();
        loader
            .cache
            .insert("u".to_string(), vec![SymbolRecord::new("TCS")]);

        loader.invalidate();
        assert!(loader.cache.is_empty());
    }
}
