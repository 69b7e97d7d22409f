//! Brand Monitor API server
//!
//! # Usage
//!
//! Keys come from the environment or a `.env` file in the working directory.
//!
//! ```bash
//! export GEMINI_API_KEY="..."
//! export SERPER_API_KEY="..."
//! # optional: fills company profile fields Yahoo leaves empty
//! export ALPHA_VANTAGE_API_KEY="..."
//!
//! cargo run --bin brand-monitor -- --port 8080
//! ```

use agent_utils::{LogFormat, init_tracing};
use anyhow::Context as _;
use brand_monitor::{BrandConfig, BrandCrew, server};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "brand-monitor", version, about = "Brand monitoring report API")]
struct Args {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,

    /// Log output format (pretty or json)
    #[arg(long, env = "LOG_FORMAT", default_value = "pretty")]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.log_format, "info,brand_monitor=debug");

    let config = BrandConfig::from_env().context("Invalid configuration")?;
    info!(
        model = %config.llm_model,
        alpha_vantage = config.alpha_vantage_api_key.is_some(),
        "Configuration loaded"
    );

    let crew = BrandCrew::new(&config).context("Failed to build brand crew")?;

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", args.host, args.port))?;

    server::serve(addr, Arc::new(crew)).await?;
    Ok(())
}
