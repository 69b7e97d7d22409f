//! Tool trait definition

use agent_core::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Trait for tools that agents can execute
///
/// Tools answer with plain text. Failures an agent should see and reason
/// about (no results, upstream API errors) are reported as text in `Ok`;
/// `Err` is reserved for malformed calls, and the executor turns it into an
/// error tool result.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Execute the tool with JSON parameters matching `input_schema`
    async fn execute(&self, params: Value) -> Result<String>;

    /// Tool name, unique within a registry
    fn name(&self) -> &str;

    /// Description the model uses to decide when to call the tool
    fn description(&self) -> &str;

    /// JSON Schema of the tool's parameters
    ///
    /// ```
    /// use serde_json::json;
    ///
    /// let schema = json!({
    ///     "type": "object",
    ///     "properties": {
    ///         "ticker": { "type": "string", "description": "Stock ticker symbol" }
    ///     },
    ///     "required": ["ticker"]
    /// });
    /// assert_eq!(schema["required"][0], "ticker");
    /// ```
    fn input_schema(&self) -> Value;
}

/// Read a required string parameter from a tool call
pub fn required_str<'a>(params: &'a Value, key: &str) -> Result<&'a str> {
    params
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| agent_core::Error::InvalidInput(format!("Missing required parameter '{key}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required_str() {
        let params = json!({"ticker": " NKE ", "empty": "  ", "number": 3});
        assert_eq!(required_str(&params, "ticker").unwrap(), "NKE");
        assert!(required_str(&params, "empty").is_err());
        assert!(required_str(&params, "number").is_err());

        let err = required_str(&params, "missing").unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameter 'missing'");
    }
}
