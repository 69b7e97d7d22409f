//! HTTP clients for the search and market data providers

pub mod alpha_vantage;
pub mod serper;
pub mod yahoo;

pub use alpha_vantage::{AlphaVantageClient, CompanyOverview};
pub use serper::SerperClient;
pub use yahoo::YahooFinanceClient;
