//! Agent construction over a shared LLM binding

use super::{AgentKind, AgentSpec};
use crate::config::BrandConfig;
use crate::error::Result;
use crate::finance::FinancialDataClient;
use crate::search::WebSearchClient;
use crate::tools::{DelegateWorkTool, FinancialDataTool, WebSearchTool};
use agent_core::Agent;
use agent_llm::LLMProvider;
use agent_prompt::PromptRegistry;
use agent_runtime::{AgentExecutor, ToolAgent};
use agent_tools::ToolRegistry;
use std::sync::Arc;
use tracing::debug;

/// LLM settings shared by every agent
#[derive(Clone)]
pub struct LlmBinding {
    pub provider: Arc<dyn LLMProvider>,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: usize,
    pub max_iterations: usize,
}

impl LlmBinding {
    pub fn from_config(provider: Arc<dyn LLMProvider>, config: &BrandConfig) -> Self {
        Self {
            provider,
            model: config.llm_model.clone(),
            temperature: config.llm_temperature,
            max_tokens: config.llm_max_tokens,
            max_iterations: config.max_iterations,
        }
    }
}

impl std::fmt::Debug for LlmBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmBinding")
            .field("provider", &self.provider.name())
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("max_iterations", &self.max_iterations)
            .finish()
    }
}

/// The five agents, ready to be bound to tasks
///
/// Search gets web search, Finance gets stock data, and Comparison may
/// delegate to any of the other four.
#[derive(Clone)]
pub struct AgentRoster {
    agents: [Arc<dyn Agent>; 5],
}

impl AgentRoster {
    pub fn build(
        binding: &LlmBinding,
        prompts: &PromptRegistry,
        search: WebSearchClient,
        finance: FinancialDataClient,
    ) -> Result<Self> {
        let search_agent: Arc<dyn Agent> = Arc::new(build_agent(
            binding,
            prompts,
            AgentKind::Search.spec(),
            ToolRegistry::new().with_tool(Arc::new(WebSearchTool::new(search))),
        )?);
        let sentiment_agent: Arc<dyn Agent> = Arc::new(build_agent(
            binding,
            prompts,
            AgentKind::Sentiment.spec(),
            ToolRegistry::new(),
        )?);
        let finance_agent: Arc<dyn Agent> = Arc::new(build_agent(
            binding,
            prompts,
            AgentKind::Finance.spec(),
            ToolRegistry::new().with_tool(Arc::new(FinancialDataTool::new(finance))),
        )?);
        let report_agent: Arc<dyn Agent> = Arc::new(build_agent(
            binding,
            prompts,
            AgentKind::Report.spec(),
            ToolRegistry::new(),
        )?);

        let coworkers = vec![
            search_agent.clone(),
            sentiment_agent.clone(),
            finance_agent.clone(),
            report_agent.clone(),
        ];
        let comparison_agent: Arc<dyn Agent> = Arc::new(build_agent(
            binding,
            prompts,
            AgentKind::Comparison.spec(),
            ToolRegistry::new().with_tool(Arc::new(DelegateWorkTool::new(coworkers))),
        )?);

        Ok(Self {
            agents: [
                search_agent,
                sentiment_agent,
                finance_agent,
                comparison_agent,
                report_agent,
            ],
        })
    }

    /// The agent playing `kind`
    pub fn get(&self, kind: AgentKind) -> Arc<dyn Agent> {
        Arc::clone(&self.agents[kind.index()])
    }
}

impl std::fmt::Debug for AgentRoster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.agents.iter().map(|a| a.name()))
            .finish()
    }
}

fn build_agent(
    binding: &LlmBinding,
    prompts: &PromptRegistry,
    spec: &AgentSpec,
    tools: ToolRegistry,
) -> Result<ToolAgent> {
    let system_prompt = prompts.render("brand.agent_system", spec)?;
    debug!(role = spec.role, tools = ?tools.names(), "Building agent");

    let executor = AgentExecutor::builder()
        .provider(Arc::clone(&binding.provider))
        .tool_registry(tools)
        .model(binding.model.as_str())
        .system_prompt(system_prompt)
        .max_tokens(binding.max_tokens)
        .temperature(binding.temperature)
        .max_iterations(binding.max_iterations)
        .build()?;

    Ok(ToolAgent::new(executor, spec.role).with_delegation(spec.allow_delegation))
}
