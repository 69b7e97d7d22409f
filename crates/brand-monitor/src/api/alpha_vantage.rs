//! Alpha Vantage API client (company overview)

use crate::error::{BrandError, Result};
use crate::finance::CompanyProfile;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// Company overview as returned by the `OVERVIEW` function
///
/// Alpha Vantage encodes every number as a string and uses `"None"` or `"-"`
/// for missing values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompanyOverview {
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub exchange: Option<String>,
    pub sector: Option<String>,
    #[serde(rename = "MarketCapitalization")]
    pub market_cap: Option<String>,
    #[serde(rename = "PERatio")]
    pub pe_ratio: Option<String>,
    #[serde(rename = "DividendYield")]
    pub dividend_yield: Option<String>,
}

impl CompanyOverview {
    /// Typed profile; unparseable or placeholder values become `None`
    pub fn into_profile(self) -> CompanyProfile {
        CompanyProfile {
            name: self.name.filter(|n| !is_placeholder(n)),
            market_cap: parse_number(self.market_cap.as_deref()),
            pe_ratio: parse_number(self.pe_ratio.as_deref()),
            dividend_yield: parse_number(self.dividend_yield.as_deref()),
        }
    }
}

fn is_placeholder(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value == "-" || value.eq_ignore_ascii_case("none")
}

fn parse_number(value: Option<&str>) -> Option<f64> {
    value
        .filter(|v| !is_placeholder(v))
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Alpha Vantage API client
#[derive(Debug, Clone)]
pub struct AlphaVantageClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl AlphaVantageClient {
    /// Create a client for `base_url` (normally `https://www.alphavantage.co/query`)
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }

    /// Fetch the company overview for a symbol
    #[instrument(skip(self))]
    pub async fn company_overview(&self, symbol: &str) -> Result<CompanyOverview> {
        let params = [
            ("function", "OVERVIEW"),
            ("symbol", symbol),
            ("apikey", self.api_key.as_str()),
        ];

        let response = self.client.get(&self.base_url).query(&params).send().await?;

        if !response.status().is_success() {
            return Err(BrandError::AlphaVantage(format!(
                "HTTP error: {}",
                response.status()
            )));
        }

        let data: serde_json::Value = response.json().await?;

        for key in ["Error Message", "Note", "Information"] {
            if let Some(message) = data.get(key) {
                return Err(BrandError::AlphaVantage(
                    message.as_str().unwrap_or_default().to_string(),
                ));
            }
        }

        if data.as_object().is_none_or(serde_json::Map::is_empty) {
            return Err(BrandError::AlphaVantage(format!(
                "No company overview for {symbol}"
            )));
        }

        let overview: CompanyOverview = serde_json::from_value(data)?;
        debug!(symbol, name = overview.name.as_deref().unwrap_or("-"), "Fetched company overview");
        Ok(overview)
    }
}
