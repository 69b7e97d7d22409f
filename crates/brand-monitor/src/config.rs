//! Configuration for brand monitoring runs
//!
//! Built once at startup (usually from the environment) and shared read-only
//! by every request.

use crate::error::{BrandError, Result};
use agent_utils::{env_or, env_parse, env_string};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Gemini's OpenAI-compatible endpoint
pub const DEFAULT_LLM_API_BASE: &str = agent_llm::providers::openai::DEFAULT_API_BASE;
/// Default chat model
pub const DEFAULT_LLM_MODEL: &str = "gemini-2.0-flash";
/// Serper Google search endpoint
pub const DEFAULT_SERPER_API_URL: &str = "https://google.serper.dev/search";
/// Alpha Vantage query endpoint
pub const DEFAULT_ALPHA_VANTAGE_API_URL: &str = "https://www.alphavantage.co/query";

/// Configuration for brand monitoring runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandConfig {
    /// API key for the LLM backend
    #[serde(skip_serializing)]
    pub llm_api_key: String,

    /// Base URL of the OpenAI-compatible LLM API
    pub llm_api_base: String,

    /// Model used by every agent
    pub llm_model: String,

    /// Sampling temperature shared by every agent
    pub llm_temperature: f32,

    /// Max tokens per completion
    pub llm_max_tokens: usize,

    /// Tool round trips an agent may take before it must answer
    pub max_iterations: usize,

    /// Serper API key
    #[serde(skip_serializing)]
    pub serper_api_key: String,

    /// Serper search endpoint
    pub serper_api_url: String,

    /// Alpha Vantage API key (optional; fills company profile gaps Yahoo leaves)
    #[serde(skip_serializing)]
    pub alpha_vantage_api_key: Option<String>,

    /// Alpha Vantage query endpoint
    pub alpha_vantage_api_url: String,

    /// Timeout for every outbound HTTP request
    pub request_timeout: Duration,

    /// Organic search results kept per query
    pub search_result_limit: usize,

    /// Calendar days of price history pulled per ticker
    pub history_days: u32,

    /// Log full stage prompts and outputs
    pub verbose: bool,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            llm_api_key: String::new(),
            llm_api_base: DEFAULT_LLM_API_BASE.to_string(),
            llm_model: DEFAULT_LLM_MODEL.to_string(),
            llm_temperature: 0.7,
            llm_max_tokens: 4096,
            max_iterations: 10,
            serper_api_key: String::new(),
            serper_api_url: DEFAULT_SERPER_API_URL.to_string(),
            alpha_vantage_api_key: None,
            alpha_vantage_api_url: DEFAULT_ALPHA_VANTAGE_API_URL.to_string(),
            request_timeout: Duration::from_secs(120),
            search_result_limit: 4,
            history_days: 30,
            verbose: true,
        }
    }
}

impl BrandConfig {
    /// Create a new configuration builder
    pub fn builder() -> BrandConfigBuilder {
        BrandConfigBuilder::default()
    }

    /// Load and validate configuration from the process environment
    ///
    /// The binary loads `.env` into the environment before calling this.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load and validate configuration from an arbitrary variable lookup
    ///
    /// | variable | default |
    /// |---|---|
    /// | `LLM_API_KEY` / `GEMINI_API_KEY` | required |
    /// | `LLM_API_BASE` | Gemini OpenAI-compatible endpoint |
    /// | `LLM_MODEL` | `gemini-2.0-flash` |
    /// | `LLM_TEMPERATURE` | `0.7` |
    /// | `LLM_MAX_TOKENS` | `4096` |
    /// | `AGENT_MAX_ITERATIONS` | `10` |
    /// | `SERPER_API_KEY` | required |
    /// | `SERPER_API_URL` | `https://google.serper.dev/search` |
    /// | `ALPHA_VANTAGE_API_KEY` | unset |
    /// | `ALPHA_VANTAGE_API_URL` | `https://www.alphavantage.co/query` |
    /// | `REQUEST_TIMEOUT_SECS` | `120` |
    /// | `SEARCH_RESULT_LIMIT` | `4` |
    /// | `HISTORY_DAYS` | `30` |
    /// | `PIPELINE_VERBOSE` | `true` |
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let config_err = |e: agent_utils::EnvError| BrandError::Config(e.to_string());

        let config = Self {
            llm_api_key: env_string(&lookup, "LLM_API_KEY")
                .or_else(|| env_string(&lookup, "GEMINI_API_KEY"))
                .unwrap_or_default(),
            llm_api_base: env_string(&lookup, "LLM_API_BASE").unwrap_or(defaults.llm_api_base),
            llm_model: env_string(&lookup, "LLM_MODEL").unwrap_or(defaults.llm_model),
            llm_temperature: env_or(&lookup, "LLM_TEMPERATURE", defaults.llm_temperature)
                .map_err(config_err)?,
            llm_max_tokens: env_or(&lookup, "LLM_MAX_TOKENS", defaults.llm_max_tokens)
                .map_err(config_err)?,
            max_iterations: env_or(&lookup, "AGENT_MAX_ITERATIONS", defaults.max_iterations)
                .map_err(config_err)?,
            serper_api_key: env_string(&lookup, "SERPER_API_KEY").unwrap_or_default(),
            serper_api_url: env_string(&lookup, "SERPER_API_URL")
                .unwrap_or(defaults.serper_api_url),
            alpha_vantage_api_key: env_string(&lookup, "ALPHA_VANTAGE_API_KEY"),
            alpha_vantage_api_url: env_string(&lookup, "ALPHA_VANTAGE_API_URL")
                .unwrap_or(defaults.alpha_vantage_api_url),
            request_timeout: env_parse::<u64>(&lookup, "REQUEST_TIMEOUT_SECS")
                .map_err(config_err)?
                .map_or(defaults.request_timeout, Duration::from_secs),
            search_result_limit: env_or(
                &lookup,
                "SEARCH_RESULT_LIMIT",
                defaults.search_result_limit,
            )
            .map_err(config_err)?,
            history_days: env_or(&lookup, "HISTORY_DAYS", defaults.history_days)
                .map_err(config_err)?,
            verbose: env_or(&lookup, "PIPELINE_VERBOSE", defaults.verbose).map_err(config_err)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.llm_api_key.trim().is_empty() {
            return Err(BrandError::Config(
                "GEMINI_API_KEY (or LLM_API_KEY) must be set".to_string(),
            ));
        }

        if self.serper_api_key.trim().is_empty() {
            return Err(BrandError::Config("SERPER_API_KEY must be set".to_string()));
        }

        if self.max_iterations == 0 {
            return Err(BrandError::Config(
                "max_iterations must be greater than 0".to_string(),
            ));
        }

        if self.search_result_limit == 0 {
            return Err(BrandError::Config(
                "search_result_limit must be greater than 0".to_string(),
            ));
        }

        if self.history_days == 0 {
            return Err(BrandError::Config(
                "history_days must be greater than 0".to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&self.llm_temperature) {
            return Err(BrandError::Config(format!(
                "llm_temperature must be between 0 and 2, got {}",
                self.llm_temperature
            )));
        }

        Ok(())
    }
}

/// Builder for BrandConfig
#[derive(Debug, Default)]
pub struct BrandConfigBuilder {
    config: BrandConfig,
}

impl BrandConfigBuilder {
    /// Set the LLM API key
    pub fn llm_api_key(mut self, key: impl Into<String>) -> Self {
        self.config.llm_api_key = key.into();
        self
    }

    /// Set the LLM API base URL
    pub fn llm_api_base(mut self, base: impl Into<String>) -> Self {
        self.config.llm_api_base = base.into();
        self
    }

    /// Set the model
    pub fn llm_model(mut self, model: impl Into<String>) -> Self {
        self.config.llm_model = model.into();
        self
    }

    /// Set the sampling temperature
    pub fn llm_temperature(mut self, temperature: f32) -> Self {
        self.config.llm_temperature = temperature;
        self
    }

    /// Set the per-agent tool iteration budget
    pub fn max_iterations(mut self, max: usize) -> Self {
        self.config.max_iterations = max;
        self
    }

    /// Set the Serper API key
    pub fn serper_api_key(mut self, key: impl Into<String>) -> Self {
        self.config.serper_api_key = key.into();
        self
    }

    /// Set the Serper endpoint
    pub fn serper_api_url(mut self, url: impl Into<String>) -> Self {
        self.config.serper_api_url = url.into();
        self
    }

    /// Set the Alpha Vantage API key
    pub fn alpha_vantage_api_key(mut self, key: impl Into<String>) -> Self {
        self.config.alpha_vantage_api_key = Some(key.into());
        self
    }

    /// Set the outbound request timeout
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    /// Set how many organic search results are kept
    pub fn search_result_limit(mut self, limit: usize) -> Self {
        self.config.search_result_limit = limit;
        self
    }

    /// Set how many calendar days of history are pulled
    pub fn history_days(mut self, days: u32) -> Self {
        self.config.history_days = days;
        self
    }

    /// Enable or disable verbose stage logging
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    /// Build and validate the configuration
    pub fn build(mut self) -> Result<BrandConfig> {
        let config = self.config.clone();
        config.validate()?;
        Ok(config)
    }
}
