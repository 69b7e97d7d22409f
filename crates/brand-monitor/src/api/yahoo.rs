//! Yahoo Finance chart history and quote summary client

use crate::error::{BrandError, Result};
use crate::finance::{CompanyProfile, DailyBar};
use chrono::{DateTime, Duration, Utc};
use time::OffsetDateTime;
use tracing::{debug, instrument};
use yahoo_finance_api as yahoo;

/// Yahoo Finance API client
#[derive(Debug, Clone, Copy, Default)]
pub struct YahooFinanceClient;

impl YahooFinanceClient {
    /// Create a new Yahoo Finance client
    pub fn new() -> Self {
        Self
    }

    /// Daily bars for `symbol` over the last `days` calendar days, oldest first
    #[instrument(skip(self))]
    pub async fn daily_history(&self, symbol: &str, days: u32) -> Result<Vec<DailyBar>> {
        let end = Utc::now();
        let start = end - Duration::days(i64::from(days));
        self.history_between(symbol, start, end).await
    }

    /// Daily bars for `symbol` between two instants, oldest first
    ///
    /// An unknown symbol or a window without trading days yields no bars.
    pub async fn history_between(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<DailyBar>> {
        let provider = yahoo::YahooConnector::new()
            .map_err(|e| BrandError::YahooFinance(e.to_string()))?;

        let start_odt = OffsetDateTime::from_unix_timestamp(start.timestamp())
            .map_err(|e| BrandError::YahooFinance(format!("Invalid start timestamp: {e}")))?;
        let end_odt = OffsetDateTime::from_unix_timestamp(end.timestamp())
            .map_err(|e| BrandError::YahooFinance(format!("Invalid end timestamp: {e}")))?;

        let response = provider
            .get_quote_history(symbol, start_odt, end_odt)
            .await
            .map_err(|e| BrandError::YahooFinance(e.to_string()))?;

        let bars = bars_from_response(&response)?;
        debug!(symbol, bars = bars.len(), "Fetched daily history");
        Ok(bars)
    }

    /// Company name and valuation figures from the quote summary
    #[instrument(skip(self))]
    pub async fn company_profile(&self, symbol: &str) -> Result<CompanyProfile> {
        let mut provider = yahoo::YahooConnector::new()
            .map_err(|e| BrandError::YahooFinance(e.to_string()))?;

        let summary = provider
            .get_ticker_info(symbol)
            .await
            .map_err(|e| BrandError::YahooFinance(e.to_string()))?;

        Ok(profile_from_summary(&summary))
    }
}

/// Chart response to sorted daily bars
pub(crate) fn bars_from_response(response: &yahoo::YResponse) -> Result<Vec<DailyBar>> {
    let quotes = match response.quotes() {
        Ok(quotes) => quotes,
        Err(yahoo::YahooError::NoQuotes | yahoo::YahooError::NoResult) => return Ok(Vec::new()),
        Err(e) => return Err(BrandError::YahooFinance(e.to_string())),
    };

    let mut bars: Vec<DailyBar> = quotes
        .iter()
        .filter_map(|q| {
            DateTime::from_timestamp(q.timestamp, 0).map(|timestamp| DailyBar {
                timestamp,
                close: q.close,
                volume: q.volume,
            })
        })
        .collect();
    bars.sort_by_key(|bar| bar.timestamp);
    Ok(bars)
}

/// First summary result to a profile; missing modules leave fields empty
pub(crate) fn profile_from_summary(summary: &yahoo::YQuoteSummary) -> CompanyProfile {
    let Some(data) = summary
        .quote_summary
        .as_ref()
        .and_then(|s| s.result.as_ref())
        .and_then(|r| r.first())
    else {
        return CompanyProfile::default();
    };

    let name = data.quote_type.as_ref().and_then(|q| {
        q.long_name
            .clone()
            .or_else(|| q.short_name.clone())
            .filter(|n| !n.trim().is_empty())
    });
    let detail = data.summary_detail.as_ref();
    #[allow(clippy::cast_precision_loss)]
    let market_cap = detail.and_then(|d| d.market_cap).map(|cap| cap as f64);

    CompanyProfile {
        name,
        market_cap,
        pe_ratio: detail.and_then(|d| d.trailing_pe).filter(|pe| pe.is_finite()),
        dividend_yield: detail.and_then(|d| d.dividend_yield),
    }
}
