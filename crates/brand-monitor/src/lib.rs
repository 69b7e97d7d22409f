//! Brand monitoring report generator
//!
//! Given a brand and its competitors, five LLM agents run one after another:
//!
//! 1. **Search** collects a recent news item per brand (Serper web search)
//! 2. **Sentiment** scores the tone of that coverage
//! 3. **Finance** pulls price, 7-day trend and volatility per ticker
//! 4. **Comparison** ranks the brand against its competitors
//! 5. **Report** writes the executive Markdown report
//!
//! Every stage after the first sees the outputs of all stages before it.
//! The report is served over HTTP by [`server::router`].
//!
//! # Example
//!
//! ```rust,no_run
//! use brand_monitor::{BrandConfig, BrandCrew, Competitor};
//!
//! # async fn example() -> brand_monitor::Result<()> {
//! let config = BrandConfig::from_env()?;
//! let crew = BrandCrew::new(&config)?;
//!
//! let report = crew
//!     .run("Nike", &[Competitor::new("Adidas", "ADDYY")])
//!     .await?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

pub mod agents;
pub mod api;
pub mod config;
pub mod crew;
pub mod error;
pub mod finance;
pub mod models;
pub mod prompts;
pub mod search;
pub mod server;
pub mod tasks;
pub mod tools;

pub use config::BrandConfig;
pub use crew::{BrandAnalyzer, BrandCrew};
pub use error::{BrandError, Result};
pub use finance::{FinancialDataClient, MarketData, MarketDataSource};
pub use models::{AnalysisRequest, AnalysisResponse, AnalysisStatus, Competitor};
pub use search::WebSearchClient;
