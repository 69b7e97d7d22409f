//! Tool agent implementation (wraps AgentExecutor)

use crate::executor::AgentExecutor;
use agent_core::{Agent, Context, Result};
use async_trait::async_trait;
use tracing::debug;

/// An agent that answers a task by running the LLM tool loop
///
/// # Example
///
/// ```no_run
/// use agent_core::{Agent, Context};
/// use agent_runtime::{AgentExecutor, ToolAgent};
/// # use std::sync::Arc;
///
/// # async fn example(provider: Arc<dyn agent_llm::LLMProvider>) -> agent_core::Result<()> {
/// let executor = AgentExecutor::builder()
///     .provider(provider)
///     .system_prompt("You are Search Agent.")
///     .build()?;
/// let agent = ToolAgent::new(executor, "Search Agent");
///
/// let mut context = Context::new();
/// let answer = agent.process("Find Nike news".to_string(), &mut context).await?;
/// # Ok(())
/// # }
/// ```
pub struct ToolAgent {
    executor: AgentExecutor,
    name: String,
    allow_delegation: bool,
}

impl ToolAgent {
    /// Create a new tool agent
    pub fn new(executor: AgentExecutor, name: impl Into<String>) -> Self {
        Self {
            executor,
            name: name.into(),
            allow_delegation: false,
        }
    }

    /// Mark the agent as allowed to hand sub-questions to coworkers
    pub fn with_delegation(mut self, allow: bool) -> Self {
        self.allow_delegation = allow;
        self
    }

    /// Get a reference to the underlying executor
    pub fn executor(&self) -> &AgentExecutor {
        &self.executor
    }
}

#[async_trait]
impl Agent for ToolAgent {
    async fn process(&self, input: String, context: &mut Context) -> Result<String> {
        debug!(
            agent = %self.name,
            stage = context.current_stage().unwrap_or("-"),
            run_id = context.run_id().unwrap_or("-"),
            brand = context.brand_name().unwrap_or("-"),
            "Agent processing task"
        );
        self.executor.run(input).await
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn allows_delegation(&self) -> bool {
        self.allow_delegation
    }
}
