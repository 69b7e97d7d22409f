//! Tool registry for managing available tools

use crate::Tool;
use std::sync::Arc;
use tracing::debug;

/// Ordered set of tools available to one agent
///
/// Registration order is kept so tool definitions reach the model in a
/// stable order. Registering a name twice replaces the earlier tool.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new tool registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        if let Some(slot) = self.tools.iter_mut().find(|t| t.name() == tool.name()) {
            debug!(tool = tool.name(), "Replacing registered tool");
            *slot = tool;
        } else {
            self.tools.push(tool);
        }
    }

    /// Register a tool, builder style
    #[must_use]
    pub fn with_tool(mut self, tool: Arc<dyn Tool>) -> Self {
        self.register(tool);
        self
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.name() == name).cloned()
    }

    /// List all registered tools in registration order
    pub fn list_tools(&self) -> &[Arc<dyn Tool>] {
        &self.tools
    }

    /// Names of all registered tools
    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agent_core::Result;
    use async_trait::async_trait;
    use serde_json::{Value, json};

    struct Echo {
        name: &'static str,
        reply: &'static str,
    }

    #[async_trait]
    impl Tool for Echo {
        async fn execute(&self, _params: Value) -> Result<String> {
            Ok(self.reply.to_string())
        }

        fn name(&self) -> &str {
            self.name
        }

        fn description(&self) -> &str {
            "echo"
        }

        fn input_schema(&self) -> Value {
            json!({"type": "object"})
        }
    }

    #[test]
    fn test_register_keeps_order() {
        let registry = ToolRegistry::new()
            .with_tool(Arc::new(Echo { name: "web_search", reply: "a" }))
            .with_tool(Arc::new(Echo { name: "fetch_financial_data", reply: "b" }));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), vec!["web_search", "fetch_financial_data"]);
        assert!(registry.get("missing").is_none());
    }

    #[tokio::test]
    async fn test_register_same_name_replaces() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(Echo { name: "web_search", reply: "old" }));
        registry.register(Arc::new(Echo { name: "web_search", reply: "new" }));

        assert_eq!(registry.len(), 1);
        let tool = registry.get("web_search").unwrap();
        assert_eq!(tool.execute(json!({})).await.unwrap(), "new");
    }
}
