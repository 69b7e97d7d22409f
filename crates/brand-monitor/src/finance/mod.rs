//! Financial data lookup for stock tickers
//!
//! [`FinancialDataClient`] turns a ticker into the text block the finance
//! agent reads. Provider failures never escape it; they come back as text.

pub mod metrics;

use crate::api::{AlphaVantageClient, YahooFinanceClient};
use crate::error::{BrandError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument, warn};

pub use metrics::{FinancialSnapshot, VolatilityBucket};

/// Rule placed between blocks by [`FinancialDataClient::fetch_many`]
pub const MULTI_TICKER_SEPARATOR: &str =
    "\n==================================================\n";

/// One trading day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
    pub volume: u64,
}

/// Company metadata; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub name: Option<String>,
    pub market_cap: Option<f64>,
    pub pe_ratio: Option<f64>,
    /// Fraction, `0.0152` for 1.52%
    pub dividend_yield: Option<f64>,
}

impl CompanyProfile {
    /// Every field is known
    pub fn is_complete(&self) -> bool {
        self.name.is_some()
            && self.market_cap.is_some()
            && self.pe_ratio.is_some()
            && self.dividend_yield.is_some()
    }

    /// Fill the fields this profile lacks from `fallback`
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        Self {
            name: self.name.or(fallback.name),
            market_cap: self.market_cap.or(fallback.market_cap),
            pe_ratio: self.pe_ratio.or(fallback.pe_ratio),
            dividend_yield: self.dividend_yield.or(fallback.dividend_yield),
        }
    }
}

/// Where prices and company metadata come from
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Daily bars over the last `days` calendar days, oldest first
    async fn daily_history(&self, ticker: &str, days: u32) -> Result<Vec<DailyBar>>;

    /// Company name and valuation figures
    async fn company_profile(&self, ticker: &str) -> Result<CompanyProfile>;
}

/// Yahoo Finance history and profile, with Alpha Vantage filling profile gaps
#[derive(Debug, Clone, Default)]
pub struct MarketData {
    yahoo: YahooFinanceClient,
    alpha_vantage: Option<AlphaVantageClient>,
}

impl MarketData {
    pub fn new(alpha_vantage: Option<AlphaVantageClient>) -> Self {
        Self {
            yahoo: YahooFinanceClient::new(),
            alpha_vantage,
        }
    }
}

#[async_trait]
impl MarketDataSource for MarketData {
    async fn daily_history(&self, ticker: &str, days: u32) -> Result<Vec<DailyBar>> {
        self.yahoo.daily_history(ticker, days).await
    }

    async fn company_profile(&self, ticker: &str) -> Result<CompanyProfile> {
        let primary = match self.yahoo.company_profile(ticker).await {
            Ok(profile) => profile,
            Err(e) if self.alpha_vantage.is_some() => {
                warn!(ticker, error = %e, "Yahoo quote summary unavailable");
                CompanyProfile::default()
            }
            Err(e) => return Err(e),
        };
        if primary.is_complete() {
            return Ok(primary);
        }

        let Some(client) = &self.alpha_vantage else {
            return Ok(primary);
        };
        match client.company_overview(ticker).await {
            Ok(overview) => Ok(primary.or(overview.into_profile())),
            Err(e) if primary != CompanyProfile::default() => {
                warn!(ticker, error = %e, "Alpha Vantage overview unavailable");
                Ok(primary)
            }
            Err(e) => Err(e),
        }
    }
}

/// Ticker in, formatted metrics text out
#[derive(Clone)]
pub struct FinancialDataClient {
    source: Arc<dyn MarketDataSource>,
    history_days: u32,
}

impl FinancialDataClient {
    pub fn new(source: Arc<dyn MarketDataSource>, history_days: u32) -> Self {
        Self {
            source,
            history_days,
        }
    }

    /// Financial data block for one ticker, or a line describing what went wrong
    #[instrument(skip(self))]
    pub async fn fetch(&self, ticker: &str) -> String {
        let ticker = ticker.trim().to_uppercase();
        info!(ticker = %ticker, "Fetching financial data");

        match self.snapshot(&ticker).await {
            Ok(Some(snapshot)) => {
                info!(ticker = %ticker, "Financial data retrieved");
                snapshot.render(&Local::now().format("%Y-%m-%d %H:%M:%S").to_string())
            }
            Ok(None) => {
                warn!(ticker = %ticker, "No historical data found");
                format!("No historical data found for ticker: {ticker}")
            }
            Err(e) => {
                warn!(ticker = %ticker, error = %e, "Financial data fetch failed");
                format!("Error fetching financial data for {ticker}: {e}")
            }
        }
    }

    /// Blocks for several tickers, in order, separated by a rule
    pub async fn fetch_many(&self, tickers: &[String]) -> String {
        let mut blocks = Vec::with_capacity(tickers.len());
        for ticker in tickers {
            blocks.push(self.fetch(ticker).await);
        }
        blocks.join(MULTI_TICKER_SEPARATOR)
    }

    async fn snapshot(&self, ticker: &str) -> Result<Option<FinancialSnapshot>> {
        if ticker.is_empty() {
            return Err(BrandError::InvalidTicker(ticker.to_string()));
        }

        let history = self.source.daily_history(ticker, self.history_days).await?;
        if history.is_empty() {
            return Ok(None);
        }

        let profile = self
            .source
            .company_profile(ticker)
            .await
            .unwrap_or_else(|e| {
                warn!(ticker, error = %e, "Company profile unavailable");
                CompanyProfile::default()
            });

        Ok(FinancialSnapshot::from_history(ticker, &history, profile))
    }
}

impl std::fmt::Debug for FinancialDataClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinancialDataClient")
            .field("history_days", &self.history_days)
            .finish_non_exhaustive()
    }
}
