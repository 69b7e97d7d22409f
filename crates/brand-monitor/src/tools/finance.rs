//! Tool for fetching stock financial data

use agent_core::Result as AgentResult;
use agent_llm::tools::schema;
use agent_tools::Tool;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::finance::FinancialDataClient;

/// Tool for fetching price, trend and valuation figures for a ticker
///
/// A comma-separated `ticker` (`"NKE, ADDYY"`) returns one block per symbol.
pub struct FinancialDataTool {
    client: FinancialDataClient,
}

#[derive(Debug, Deserialize)]
struct FinancialDataParams {
    ticker: String,
}

impl FinancialDataTool {
    /// Create a new financial data tool
    pub fn new(client: FinancialDataClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for FinancialDataTool {
    async fn execute(&self, params: Value) -> AgentResult<String> {
        let params: FinancialDataParams =
            serde_json::from_value(params).map_err(super::invalid_params)?;

        let tickers: Vec<String> = params
            .ticker
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        match tickers.as_slice() {
            [] => Err(agent_core::Error::InvalidInput(
                "Missing required parameter 'ticker'".to_string(),
            )),
            [ticker] => Ok(self.client.fetch(ticker).await),
            _ => Ok(self.client.fetch_many(&tickers).await),
        }
    }

    fn name(&self) -> &'static str {
        "get_stock_financial_data"
    }

    fn description(&self) -> &'static str {
        "Get Stock Financial Data. Useful to get financial data about a stock ticker \
         including current price, historical performance, and key metrics"
    }

    fn input_schema(&self) -> Value {
        schema::object(
            json!({
                "ticker": schema::string(
                    "The stock ticker symbol to look up (e.g., AAPL, GOOGL, MSFT)"
                )
            }),
            &["ticker"],
        )
    }
}
