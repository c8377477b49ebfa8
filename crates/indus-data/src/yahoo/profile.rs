//! Company profile fetching from Yahoo Finance.
//!
//! Uses the quoteSummary endpoint with the `assetProfile` and `price`
//! modules. Fields the provider omits come back as `None` rather than as
//! errors; the caller decides how to render them.

use crate::error::{DataError, Result};
use crate::fetcher::ProfileProvider;
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;

const YAHOO_BASE_URL: &str = "https://query2.finance.yahoo.com";

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)";

/// Company name and industry classification for one symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyProfile {
    /// Long company name, when the provider supplies one.
    pub long_name: Option<String>,
    /// Free-text industry classification, when the provider supplies one.
    pub industry: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryEnvelope {
    #[serde(rename = "quoteSummary")]
    quote_summary: QuoteSummary,
}

#[derive(Debug, Deserialize)]
struct QuoteSummary {
    #[serde(default)]
    result: Option<Vec<QuoteSummaryResult>>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryResult {
    #[serde(rename = "assetProfile", default)]
    asset_profile: Option<AssetProfile>,
    #[serde(default)]
    price: Option<PriceModule>,
}

#[derive(Debug, Deserialize)]
struct AssetProfile {
    #[serde(default)]
    industry: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PriceModule {
    #[serde(rename = "longName", default)]
    long_name: Option<String>,
}

fn parse_quote_summary(body: &str) -> Result<CompanyProfile> {
    let envelope: QuoteSummaryEnvelope = serde_json::from_str(body)
        .map_err(|e| DataError::Parse(format!("quoteSummary response: {e}")))?;

    let first = envelope
        .quote_summary
        .result
        .and_then(|mut results| (!results.is_empty()).then(|| results.remove(0)));

    match first {
        Some(result) => Ok(CompanyProfile {
            long_name: result.price.and_then(|p| p.long_name),
            industry: result.asset_profile.and_then(|a| a.industry),
        }),
        None => {
            let message = envelope
                .quote_summary
                .error
                .as_ref()
                .and_then(|e| e.get("description"))
                .and_then(|d| d.as_str())
                .unwrap_or("quoteSummary returned no result")
                .to_string();
            Err(DataError::Lookup(message))
        }
    }
}

/// Yahoo Finance profile provider.
#[derive(Debug)]
pub struct YahooProfileProvider {
    client: reqwest::Client,
    base_url: String,
}

impl YahooProfileProvider {
    /// Create a new profile provider.
    ///
    /// # Errors
    /// Returns `DataError::Network` if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(DataError::Network)?;

        Ok(Self {
            client,
            base_url: YAHOO_BASE_URL.to_string(),
        })
    }

    async fn fetch(&self, symbol: &str) -> Result<CompanyProfile> {
        if symbol.is_empty() {
            return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
        }

        let url = format!(
            "{}/v10/finance/quoteSummary/{}?modules=assetProfile%2Cprice",
            self.base_url, symbol
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(DataError::Network)?;

        if !response.status().is_success() {
            return Err(DataError::Http(format!(
                "quoteSummary for {symbol}: HTTP {}",
                response.status()
            )));
        }

        let body = response.text().await.map_err(DataError::Network)?;
        parse_quote_summary(&body)
    }
}

impl ProfileProvider for YahooProfileProvider {
    fn company_profile(
        &self,
        symbol: &str,
    ) -> impl Future<Output = Result<CompanyProfile>> + Send {
        self.fetch(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quote_summary_full() {
        let body = r#"{
            "quoteSummary": {
                "result": [{
                    "assetProfile": {"industry": "Oil & Gas Refining & Marketing", "sector": "Energy"},
                    "price": {"longName": "Reliance Industries Limited", "shortName": "RELIANCE"}
                }],
                "error": null
            }
        }"#;

        let profile = parse_quote_summary(body).unwrap();
        assert_eq!(
            profile.long_name.as_deref(),
            Some("Reliance Industries Limited")
        );
        assert_eq!(
            profile.industry.as_deref(),
            Some("Oil & Gas Refining & Marketing")
        );
    }

    #[test]
    fn test_parse_quote_summary_missing_fields() {
        let body = r#"{
            "quoteSummary": {
                "result": [{"price": {"shortName": "XYZ"}}],
                "error": null
            }
        }"#;

        let profile = parse_quote_summary(body).unwrap();
        assert_eq!(profile.long_name, None);
        assert_eq!(profile.industry, None);
    }

    #[test]
    fn test_parse_quote_summary_error_payload() {
        let body = r#"{
            "quoteSummary": {
                "result": null,
                "error": {"code": "Not Found", "description": "Quote not found for ticker symbol: BOGUS.NS"}
            }
        }"#;

        let err = parse_quote_summary(body).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Quote not found for ticker symbol: BOGUS.NS"
        );
    }

    #[test]
    fn test_parse_quote_summary_malformed() {
        let result = parse_quote_summary("not json");
        assert!(matches!(result, Err(DataError::Parse(_))));
    }

    #[tokio::test]
    async fn test_empty_symbol_rejected() {
        let provider = YahooProfileProvider::new().unwrap();
        let result = provider.fetch("").await;
        assert!(matches!(result, Err(DataError::InvalidSymbol(_))));
    }
}
