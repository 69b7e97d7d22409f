//! Agent executor for running agent loops
//!
//! The AgentExecutor implements the tool loop for a single task:
//! 1. Call the LLM with the conversation and the available tools
//! 2. If the model requested tools, run them and feed the results back
//! 3. Otherwise the assistant text is the final answer
//!
//! When the iteration limit is hit the model gets one last call without
//! tools and is told to answer with what it has.

use agent_core::{Error, Result};
use agent_llm::{CompletionRequest, LLMProvider, Message, StopReason, ToolCall, ToolDefinition};
use agent_tools::ToolRegistry;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

const FORCE_ANSWER_PROMPT: &str = "You have used all the tool calls available for this task. \
Using the information gathered so far, give your best complete final answer now.";

/// Configuration for agent execution
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// Maximum number of tool round trips before forcing an answer
    pub max_iterations: usize,

    /// Model to use
    pub model: String,

    /// System prompt
    pub system_prompt: Option<String>,

    /// Max tokens per completion
    pub max_tokens: usize,

    /// Temperature
    pub temperature: Option<f32>,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10,
            model: "gemini-2.0-flash".to_string(),
            system_prompt: None,
            max_tokens: 4096,
            temperature: Some(0.7),
        }
    }
}

/// Executes an agent loop: LLM → tool calls → execution → loop back
pub struct AgentExecutor {
    provider: Arc<dyn LLMProvider>,
    tool_registry: ToolRegistry,
    config: ExecutorConfig,
}

impl AgentExecutor {
    /// Create a new agent executor
    pub fn new(
        provider: Arc<dyn LLMProvider>,
        tool_registry: ToolRegistry,
        config: ExecutorConfig,
    ) -> Self {
        Self {
            provider,
            tool_registry,
            config,
        }
    }

    /// Create a builder
    pub fn builder() -> AgentExecutorBuilder {
        AgentExecutorBuilder::new()
    }

    /// Get the executor configuration
    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Get the tools available to the model
    pub fn tools(&self) -> &ToolRegistry {
        &self.tool_registry
    }

    /// Run the loop for one task prompt and return the final answer text
    pub async fn run(&self, prompt: String) -> Result<String> {
        let mut conversation = vec![Message::user(prompt)];
        let tools = self.build_tool_definitions();

        for iteration in 1..=self.config.max_iterations {
            debug!(
                iteration,
                max_iterations = self.config.max_iterations,
                tool_count = tools.len(),
                "Agent iteration started"
            );

            let response = self.complete(&conversation, tools.clone()).await?;
            let message = response.message;

            if message.has_tool_calls() && !tools.is_empty() {
                let calls: Vec<ToolCall> = message.tool_calls().into_iter().cloned().collect();
                info!(iteration, tool_count = calls.len(), "Agent requested tool use");
                conversation.push(message);
                for call in &calls {
                    conversation.push(self.execute_tool(call).await);
                }
                continue;
            }

            if response.stop_reason == StopReason::MaxTokens {
                warn!(iteration, "LLM response hit the token limit");
            }
            return final_text(&message);
        }

        warn!(
            max_iterations = self.config.max_iterations,
            "Max iterations reached, forcing a final answer"
        );
        conversation.push(Message::user(FORCE_ANSWER_PROMPT));
        let response = self.complete(&conversation, Vec::new()).await?;
        final_text(&response.message)
    }

    async fn complete(
        &self,
        conversation: &[Message],
        tools: Vec<ToolDefinition>,
    ) -> Result<agent_llm::CompletionResponse> {
        let mut builder = CompletionRequest::builder(&self.config.model)
            .messages(conversation.to_vec())
            .max_tokens(self.config.max_tokens)
            .tools(tools);
        if let Some(system) = &self.config.system_prompt {
            builder = builder.system(system);
        }
        if let Some(temperature) = self.config.temperature {
            builder = builder.temperature(temperature);
        }

        let response = self
            .provider
            .complete(builder.build())
            .await
            .map_err(|e| Error::ProcessingFailed(format!("LLM call failed: {e}")))?;

        debug!(
            stop_reason = ?response.stop_reason,
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "LLM response received"
        );
        Ok(response)
    }

    fn build_tool_definitions(&self) -> Vec<ToolDefinition> {
        self.tool_registry
            .list_tools()
            .iter()
            .map(|tool| ToolDefinition::new(tool.name(), tool.description(), tool.input_schema()))
            .collect()
    }

    /// Run one tool call; failures come back as error tool results
    async fn execute_tool(&self, call: &ToolCall) -> Message {
        let Some(tool) = self.tool_registry.get(&call.name) else {
            warn!(tool_name = %call.name, "Model called an unknown tool");
            return Message::tool_error(
                &call.id,
                format!(
                    "Error: tool '{}' does not exist. Available tools: {}",
                    call.name,
                    self.tool_registry.names().join(", ")
                ),
            );
        };

        let input_preview: String = call.input.to_string().chars().take(200).collect();
        info!(tool_name = %call.name, input = %input_preview, "Executing tool");

        let started = Instant::now();
        match tool.execute(call.input.clone()).await {
            Ok(output) => {
                info!(
                    tool_name = %call.name,
                    duration_ms = started.elapsed().as_millis() as u64,
                    result_length = output.len(),
                    "Tool execution succeeded"
                );
                Message::tool_result(&call.id, output)
            }
            Err(e) => {
                warn!(tool_name = %call.name, error = %e, "Tool execution failed");
                Message::tool_error(&call.id, format!("Error: {e}"))
            }
        }
    }
}

fn final_text(message: &Message) -> Result<String> {
    message
        .text()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| Error::ProcessingFailed("LLM returned an empty answer".to_string()))
}

/// Builder for AgentExecutor
pub struct AgentExecutorBuilder {
    provider: Option<Arc<dyn LLMProvider>>,
    tool_registry: ToolRegistry,
    config: ExecutorConfig,
}

impl AgentExecutorBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            provider: None,
            tool_registry: ToolRegistry::new(),
            config: ExecutorConfig::default(),
        }
    }

    /// Set the LLM provider
    pub fn provider(mut self, provider: Arc<dyn LLMProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set the tool registry
    pub fn tool_registry(mut self, registry: ToolRegistry) -> Self {
        self.tool_registry = registry;
        self
    }

    /// Set the full configuration
    pub fn config(mut self, config: ExecutorConfig) -> Self {
        self.config = config;
        self
    }

    /// Set maximum iterations
    pub fn max_iterations(mut self, max: usize) -> Self {
        self.config.max_iterations = max;
        self
    }

    /// Set the model
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the system prompt
    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.system_prompt = Some(prompt.into());
        self
    }

    /// Set max tokens
    pub fn max_tokens(mut self, max_tokens: usize) -> Self {
        self.config.max_tokens = max_tokens;
        self
    }

    /// Set temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.config.temperature = Some(temperature);
        self
    }

    /// Build the executor
    pub fn build(self) -> Result<AgentExecutor> {
        let provider = self
            .provider
            .ok_or_else(|| Error::InitializationFailed("Provider not set".to_string()))?;

        if self.config.max_iterations == 0 {
            return Err(Error::InitializationFailed(
                "max_iterations must be at least 1".to_string(),
            ));
        }

        Ok(AgentExecutor::new(provider, self.tool_registry, self.config))
    }
}

impl Default for AgentExecutorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
