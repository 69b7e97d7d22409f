//! Price metrics and their text formatting

use super::{CompanyProfile, DailyBar};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rows needed before a 7-day change is reported
pub const CHANGE_WINDOW: usize = 7;

const NOT_AVAILABLE: &str = "N/A";

/// Volatility category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolatilityBucket {
    Low,
    Moderate,
    High,
}

impl VolatilityBucket {
    /// Low below 2, Moderate from 2 up to 5, High from 5
    pub fn classify(volatility: f64) -> Self {
        if volatility < 2.0 {
            Self::Low
        } else if volatility < 5.0 {
            Self::Moderate
        } else {
            Self::High
        }
    }
}

impl fmt::Display for VolatilityBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        };
        f.write_str(label)
    }
}

/// Percent change from the close `CHANGE_WINDOW` rows back to the last close
///
/// The base is `closes[len - 7]`, so seven rows span six trading intervals.
pub fn change_7d(closes: &[f64]) -> Option<f64> {
    if closes.len() < CHANGE_WINDOW {
        return None;
    }
    let current = *closes.last()?;
    let base = closes[closes.len() - CHANGE_WINDOW];
    if base == 0.0 {
        return None;
    }
    Some((current - base) / base * 100.0)
}

/// Sample standard deviation of day-over-day returns, in percent
pub fn volatility(closes: &[f64]) -> Option<f64> {
    let returns: Vec<f64> = closes
        .windows(2)
        .filter(|w| w[0] != 0.0)
        .map(|w| (w[1] - w[0]) / w[0])
        .collect();

    if returns.len() < 2 {
        return None;
    }

    let n = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / n;
    let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);
    Some(variance.sqrt() * 100.0)
}

/// Everything shown in a financial data block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    pub ticker: String,
    pub company: Option<String>,
    pub current_price: f64,
    pub change_7d: Option<f64>,
    pub volatility: Option<f64>,
    pub market_cap: Option<f64>,
    pub pe_ratio: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub avg_volume: f64,
    pub current_volume: u64,
}

impl FinancialSnapshot {
    /// Compute metrics from non-empty daily history, oldest bar first
    pub fn from_history(ticker: &str, bars: &[DailyBar], profile: CompanyProfile) -> Option<Self> {
        let last = bars.last()?;
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let total_volume: f64 = bars.iter().map(|b| b.volume as f64).sum();

        Some(Self {
            ticker: ticker.to_string(),
            company: profile.name,
            current_price: last.close,
            change_7d: change_7d(&closes),
            volatility: volatility(&closes),
            market_cap: profile.market_cap,
            pe_ratio: profile.pe_ratio,
            dividend_yield: profile.dividend_yield,
            avg_volume: total_volume / bars.len() as f64,
            current_volume: last.volume,
        })
    }

    /// Multi-line text block, stamped with `last_updated`
    pub fn render(&self, last_updated: &str) -> String {
        format!(
            "Financial Data for {ticker}:\n\
             Company: {company}\n\
             Current Price: {price}\n\
             7-Day Change: {change}\n\
             Volatility: {volatility}\n\
             Market Cap: {market_cap}\n\
             P/E Ratio: {pe}\n\
             Dividend Yield: {dividend}\n\
             Average Volume (30d): {avg_volume}\n\
             Current Volume: {current_volume}\n\
             Last Updated: {last_updated}",
            ticker = self.ticker,
            company = self.company.as_deref().unwrap_or(NOT_AVAILABLE),
            price = format_price(self.current_price),
            change = self.change_7d.map_or_else(|| NOT_AVAILABLE.to_string(), format_change),
            volatility = self
                .volatility
                .map_or_else(|| NOT_AVAILABLE.to_string(), format_volatility),
            market_cap = self
                .market_cap
                .map_or_else(|| NOT_AVAILABLE.to_string(), format_market_cap),
            pe = self
                .pe_ratio
                .map_or_else(|| NOT_AVAILABLE.to_string(), |pe| format!("{pe:.2}")),
            dividend = self
                .dividend_yield
                .map_or_else(|| NOT_AVAILABLE.to_string(), |d| format!("{:.2}%", d * 100.0)),
            avg_volume = format_volume(self.avg_volume.round()),
            current_volume = format_volume(self.current_volume as f64),
        )
    }
}

/// `$98.40`
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// `+1.25%` / `-0.80%`
pub fn format_change(change: f64) -> String {
    format!("{change:+.2}%")
}

/// `3.10% (Moderate)`
pub fn format_volatility(volatility: f64) -> String {
    format!("{volatility:.2}% ({})", VolatilityBucket::classify(volatility))
}

/// `$1.23T`, `$148.00B`, `$12.50M`; smaller values in full dollars
pub fn format_market_cap(market_cap: f64) -> String {
    if market_cap >= 1e12 {
        format!("${:.2}T", market_cap / 1e12)
    } else if market_cap >= 1e9 {
        format!("${:.2}B", market_cap / 1e9)
    } else if market_cap >= 1e6 {
        format!("${:.2}M", market_cap / 1e6)
    } else {
        format!("${}", with_thousands(market_cap.round() as u64))
    }
}

fn format_volume(volume: f64) -> String {
    if volume <= 0.0 {
        return NOT_AVAILABLE.to_string();
    }
    with_thousands(volume as u64)
}

/// `1234567` → `1,234,567`
pub fn with_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn bars(closes: &[f64]) -> Vec<DailyBar> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| DailyBar {
                timestamp: Utc.timestamp_opt(1_700_000_000 + i as i64 * 86_400, 0).unwrap(),
                close,
                volume: 1_000_000 + i as u64 * 1000,
            })
            .collect()
    }

    #[test]
    fn test_change_7d_needs_seven_rows() {
        assert_eq!(change_7d(&[100.0, 101.0, 102.0, 103.0, 104.0, 105.0]), None);

        let change = change_7d(&[100.0, 101.0, 102.0, 103.0, 104.0, 105.0, 110.0]).unwrap();
        assert!((change - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_change_7d_uses_seventh_from_last() {
        let closes = [50.0, 200.0, 101.0, 102.0, 103.0, 104.0, 105.0, 100.0];
        let change = change_7d(&closes).unwrap();
        assert!((change - (-50.0)).abs() < 1e-9);
    }

    #[test]
    fn test_volatility_needs_two_returns() {
        assert_eq!(volatility(&[100.0]), None);
        assert_eq!(volatility(&[100.0, 101.0]), None);
        assert!(volatility(&[100.0, 101.0, 99.0]).is_some());
    }

    #[test]
    fn test_volatility_sample_std() {
        // returns: +10%, -10%  → mean 0, sample variance 0.02
        let v = volatility(&[100.0, 110.0, 99.0]).unwrap();
        assert!((v - 0.02_f64.sqrt() * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_volatility_bucket_boundaries() {
        assert_eq!(VolatilityBucket::classify(1.99), VolatilityBucket::Low);
        assert_eq!(VolatilityBucket::classify(2.00), VolatilityBucket::Moderate);
        assert_eq!(VolatilityBucket::classify(4.99), VolatilityBucket::Moderate);
        assert_eq!(VolatilityBucket::classify(5.00), VolatilityBucket::High);
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_price(98.4), "$98.40");
        assert_eq!(format_change(1.25), "+1.25%");
        assert_eq!(format_change(-0.8), "-0.80%");
        assert_eq!(format_volatility(3.1), "3.10% (Moderate)");
        assert_eq!(format_market_cap(1.23e12), "$1.23T");
        assert_eq!(format_market_cap(148e9), "$148.00B");
        assert_eq!(format_market_cap(12.5e6), "$12.50M");
        assert_eq!(format_market_cap(950_000.0), "$950,000");
        assert_eq!(with_thousands(0), "0");
        assert_eq!(with_thousands(999), "999");
        assert_eq!(with_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_snapshot_render_with_missing_profile() {
        let history = bars(&[100.0, 101.0, 102.0]);
        let snapshot =
            FinancialSnapshot::from_history("NKE", &history, CompanyProfile::default()).unwrap();
        let text = snapshot.render("2025-01-02 03:04:05");

        assert!(text.starts_with("Financial Data for NKE:\nCompany: N/A\n"));
        assert!(text.contains("Current Price: $102.00\n"));
        assert!(text.contains("7-Day Change: N/A\n"));
        assert!(text.contains("Volatility: "));
        assert!(text.contains("Market Cap: N/A\nP/E Ratio: N/A\nDividend Yield: N/A\n"));
        assert!(text.contains("Average Volume (30d): 1,001,000\n"));
        assert!(text.contains("Current Volume: 1,002,000\n"));
        assert!(text.ends_with("Last Updated: 2025-01-02 03:04:05"));
    }

    #[test]
    fn test_snapshot_render_with_profile() {
        let history = bars(&[100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 101.25]);
        let profile = CompanyProfile {
            name: Some("Nike, Inc.".into()),
            market_cap: Some(148e9),
            pe_ratio: Some(28.456),
            dividend_yield: Some(0.0152),
        };
        let text = FinancialSnapshot::from_history("NKE", &history, profile)
            .unwrap()
            .render("now");

        assert!(text.contains("Company: Nike, Inc.\n"));
        assert!(text.contains("7-Day Change: +1.25%\n"));
        assert!(text.contains("Market Cap: $148.00B\n"));
        assert!(text.contains("P/E Ratio: 28.46\n"));
        assert!(text.contains("Dividend Yield: 1.52%\n"));
    }

    #[test]
    fn test_empty_history_has_no_snapshot() {
        assert!(FinancialSnapshot::from_history("NKE", &[], CompanyProfile::default()).is_none());
    }
}
