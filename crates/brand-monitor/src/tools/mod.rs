//! Tools the brand agents can call

pub mod delegate;
pub mod finance;
pub mod search;

pub use delegate::DelegateWorkTool;
pub use finance::FinancialDataTool;
pub use search::WebSearchTool;

fn invalid_params(e: serde_json::Error) -> agent_core::Error {
    agent_core::Error::InvalidInput(format!("Invalid parameters: {e}"))
}
