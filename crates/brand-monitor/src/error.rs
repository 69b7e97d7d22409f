//! Error types for brand monitoring operations

use thiserror::Error;

/// Message used when a task is built without a brand or competitors
pub const MISSING_INPUTS: &str = "Brand name and competitor list must be provided";

/// Brand monitoring specific errors
#[derive(Debug, Error)]
pub enum BrandError {
    /// Request inputs cannot produce a run
    #[error("{0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Search provider answered with a non-200 status
    #[error("Search API request failed with status {0}")]
    SearchRequestFailed(u16),

    /// Search response carried no `organic` section
    #[error("Search response contained no organic results")]
    NoSearchResults,

    /// Ticker symbol is blank or malformed
    #[error("Invalid ticker: '{0}'")]
    InvalidTicker(String),

    /// Yahoo Finance API error
    #[error("Yahoo Finance error: {0}")]
    YahooFinance(String),

    /// Alpha Vantage API error
    #[error("Alpha Vantage error: {0}")]
    AlphaVantage(String),

    /// Network or HTTP error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Prompt template error
    #[error(transparent)]
    Prompt(#[from] agent_prompt::PromptError),

    /// LLM provider error
    #[error(transparent)]
    Llm(#[from] agent_llm::LLMError),

    /// Agent or pipeline error
    #[error(transparent)]
    Agent(#[from] agent_core::Error),
}

impl BrandError {
    /// The error raised for a missing brand name or empty competitor list
    pub fn missing_inputs() -> Self {
        Self::Validation(MISSING_INPUTS.to_string())
    }
}

/// Result type alias for brand monitoring operations
pub type Result<T> = std::result::Result<T, BrandError>;

/// Convert BrandError to agent_core::Error
impl From<BrandError> for agent_core::Error {
    fn from(err: BrandError) -> Self {
        match err {
            BrandError::Agent(inner) => inner,
            BrandError::Validation(msg) => agent_core::Error::InvalidInput(msg),
            other => agent_core::Error::ProcessingFailed(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            BrandError::missing_inputs().to_string(),
            "Brand name and competitor list must be provided"
        );
        assert_eq!(
            BrandError::InvalidTicker(" ".into()).to_string(),
            "Invalid ticker: ' '"
        );
        assert_eq!(
            BrandError::SearchRequestFailed(503).to_string(),
            "Search API request failed with status 503"
        );
    }

    #[test]
    fn test_stage_failure_display_passes_through() {
        let err: BrandError = agent_core::Error::StageFailed {
            stage: "finance".into(),
            message: "LLM unavailable".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Stage 'finance' failed: LLM unavailable");
    }

    #[test]
    fn test_error_conversion() {
        let agent_err: agent_core::Error = BrandError::YahooFinance("boom".into()).into();
        match agent_err {
            agent_core::Error::ProcessingFailed(msg) => assert!(msg.contains("Yahoo Finance")),
            other => panic!("Expected ProcessingFailed, got {other:?}"),
        }

        let agent_err: agent_core::Error = BrandError::missing_inputs().into();
        assert!(matches!(agent_err, agent_core::Error::InvalidInput(_)));
    }
}
