//! Serper (Google search) API client

use crate::error::{BrandError, Result};
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, instrument};

/// Serper API client
#[derive(Debug, Clone)]
pub struct SerperClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl SerperClient {
    /// Create a client for `endpoint` (normally `https://google.serper.dev/search`)
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        })
    }

    /// Endpoint queries are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run one query and return the raw `organic` entries
    ///
    /// A non-200 answer is `SearchRequestFailed`; a body without an
    /// `organic` key is `NoSearchResults`. An `organic` value that is not an
    /// array yields no entries.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn organic_results(&self, query: &str) -> Result<Vec<Value>> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("X-API-KEY", &self.api_key)
            .json(&json!({ "q": query }))
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(BrandError::SearchRequestFailed(status.as_u16()));
        }

        let mut body: Value = response.json().await?;
        let organic = body
            .get_mut("organic")
            .map(Value::take)
            .ok_or(BrandError::NoSearchResults)?;

        let results = match organic {
            Value::Array(items) => items,
            _ => Vec::new(),
        };
        debug!(result_count = results.len(), "Search response received");
        Ok(results)
    }
}
