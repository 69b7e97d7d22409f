//! Web search returning agent-readable text

use crate::api::SerperClient;
use crate::error::BrandError;
use serde_json::Value;
use tracing::{info, instrument, warn};

/// Default number of organic results kept per query
pub const DEFAULT_RESULT_LIMIT: usize = 4;

/// Query in, formatted snippets out
///
/// Every failure is reported as text so an agent can read it and carry on.
#[derive(Debug, Clone)]
pub struct WebSearchClient {
    client: SerperClient,
    limit: usize,
}

impl WebSearchClient {
    pub fn new(client: SerperClient, limit: usize) -> Self {
        Self { client, limit }
    }

    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> String {
        info!("Starting search");

        let results = match self.client.organic_results(query).await {
            Ok(results) => results,
            Err(BrandError::SearchRequestFailed(status)) => {
                warn!(status, "Search API request failed");
                return "Error: Search API request failed".to_string();
            }
            Err(BrandError::NoSearchResults) => {
                warn!("No organic results in search response");
                return "No results found or API Error Occurred".to_string();
            }
            Err(e) => {
                warn!(error = %e, "Search failed");
                return format!("Error during search: {e}");
            }
        };

        let formatted: Vec<String> = results
            .iter()
            .take(self.limit)
            .filter_map(format_result)
            .collect();

        if formatted.is_empty() {
            warn!("No usable search results");
            return "No valid result found".to_string();
        }

        info!(result_count = formatted.len(), "Returning search results");
        formatted.join("\n")
    }
}

/// `Title/Link/Snippet` lines for one organic entry; `None` for non-objects
fn format_result(result: &Value) -> Option<String> {
    let entry = result.as_object()?;
    let field = |key: &str| match entry.get(key) {
        None | Some(Value::Null) => "N/A".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };
    Some(format!(
        "Title: {}\nLink: {}\nSnippet: {}",
        field("title"),
        field("link"),
        field("snippet")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn search_with(response: ResponseTemplate) -> String {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(response)
            .mount(&server)
            .await;

        let client = SerperClient::new("key", server.uri(), Duration::from_secs(5)).unwrap();
        WebSearchClient::new(client, DEFAULT_RESULT_LIMIT)
            .search("Nike")
            .await
    }

    #[tokio::test]
    async fn test_formats_top_four() {
        let organic: Vec<Value> = (1..=6)
            .map(|i| {
                json!({
                    "title": format!("Story {i}"),
                    "link": format!("https://news.example/{i}"),
                    "snippet": format!("Snippet {i}")
                })
            })
            .collect();

        let text =
            search_with(ResponseTemplate::new(200).set_body_json(json!({ "organic": organic })))
                .await;

        assert!(text.starts_with(
            "Title: Story 1\nLink: https://news.example/1\nSnippet: Snippet 1\nTitle: Story 2"
        ));
        assert!(text.contains("Story 4"));
        assert!(!text.contains("Story 5"));
    }

    #[tokio::test]
    async fn test_missing_fields_are_na() {
        let text = search_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"organic": [{"title": "Only title", "snippet": null}]})),
        )
        .await;
        assert_eq!(text, "Title: Only title\nLink: N/A\nSnippet: N/A");
    }

    #[tokio::test]
    async fn test_non_object_entries_skipped() {
        let text = search_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"organic": ["junk", {"title": "Real", "link": "l", "snippet": "s"}]})),
        )
        .await;
        assert_eq!(text, "Title: Real\nLink: l\nSnippet: s");
    }

    #[tokio::test]
    async fn test_non_200() {
        assert_eq!(
            search_with(ResponseTemplate::new(500)).await,
            "Error: Search API request failed"
        );
    }

    #[tokio::test]
    async fn test_missing_organic() {
        assert_eq!(
            search_with(ResponseTemplate::new(200).set_body_json(json!({"credits": 1}))).await,
            "No results found or API Error Occurred"
        );
    }

    #[tokio::test]
    async fn test_empty_organic() {
        assert_eq!(
            search_with(ResponseTemplate::new(200).set_body_json(json!({"organic": []}))).await,
            "No valid result found"
        );
    }

    #[tokio::test]
    async fn test_undecodable_body() {
        let text = search_with(ResponseTemplate::new(200).set_body_string("not json")).await;
        assert!(text.starts_with("Error during search: "));
    }
}
