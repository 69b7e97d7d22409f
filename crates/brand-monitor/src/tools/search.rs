//! Tool for searching the web

use agent_core::Result as AgentResult;
use agent_llm::tools::schema;
use agent_tools::Tool;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::search::WebSearchClient;

/// Tool for searching the internet about a topic
pub struct WebSearchTool {
    client: WebSearchClient,
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    query: String,
}

impl WebSearchTool {
    /// Create a new web search tool
    pub fn new(client: WebSearchClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for WebSearchTool {
    async fn execute(&self, params: Value) -> AgentResult<String> {
        let params: SearchParams = serde_json::from_value(params).map_err(super::invalid_params)?;
        let query = params.query.trim();
        if query.is_empty() {
            return Err(agent_core::Error::InvalidInput(
                "Missing required parameter 'query'".to_string(),
            ));
        }

        Ok(self.client.search(query).await)
    }

    fn name(&self) -> &'static str {
        "search_internet"
    }

    fn description(&self) -> &'static str {
        "Search the Internet. Useful to search the internet about the given topic and return relevant results"
    }

    fn input_schema(&self) -> Value {
        schema::object(
            json!({ "query": schema::string("The search query to look up") }),
            &["query"],
        )
    }
}
