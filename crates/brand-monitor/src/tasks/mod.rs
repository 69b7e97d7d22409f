//! The five stage tasks of a brand monitoring run

use crate::agents::AgentKind;
use crate::error::{BrandError, Result};
use crate::models::Competitor;
use agent_prompt::PromptRegistry;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

/// Stage names, in pipeline order
pub const STAGES: [&str; 5] = ["search", "sentiment", "finance", "comparison", "report"];

/// One unit of work bound to an agent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSpec {
    pub stage: &'static str,
    pub agent: AgentKind,
    pub description: String,
    pub expected_output: String,
    /// Whether earlier stage outputs are appended to the prompt
    pub uses_context: bool,
}

impl TaskSpec {
    /// Description followed by the expected-output criteria
    pub fn prompt(&self) -> String {
        format!(
            "{}\n\nThis is the expected criteria for your final answer: {}\n\
             you MUST return the actual complete content as the final answer, not a summary.",
            self.description.trim(),
            self.expected_output.trim()
        )
    }
}

#[derive(Serialize)]
struct TaskVars<'a> {
    brand_name: &'a str,
    competitor_names: String,
    competitor_tickers: String,
}

impl<'a> TaskVars<'a> {
    /// Fails unless the brand is non-blank and there is at least one competitor
    fn new(brand_name: &'a str, competitors: &[Competitor]) -> Result<Self> {
        let brand_name = brand_name.trim();
        if brand_name.is_empty() || competitors.is_empty() {
            return Err(BrandError::missing_inputs());
        }

        Ok(Self {
            brand_name,
            competitor_names: join(competitors.iter().map(|c| c.name.as_str())),
            competitor_tickers: join(competitors.iter().map(|c| c.ticker.as_str())),
        })
    }
}

fn join<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts.map(str::trim).collect::<Vec<_>>().join(", ")
}

/// Builds task specs from the registered prompt templates
#[derive(Debug, Clone)]
pub struct BrandTasks {
    prompts: Arc<PromptRegistry>,
}

impl BrandTasks {
    pub fn new(prompts: Arc<PromptRegistry>) -> Self {
        Self { prompts }
    }

    fn task<S: Serialize>(
        &self,
        stage: &'static str,
        agent: AgentKind,
        vars: &S,
        uses_context: bool,
    ) -> Result<TaskSpec> {
        Ok(TaskSpec {
            stage,
            agent,
            description: self.prompts.render(&format!("brand.task.{stage}"), vars)?,
            expected_output: self
                .prompts
                .render(&format!("brand.task.{stage}.expected"), vars)?,
            uses_context,
        })
    }

    /// Stage 1: gather one recent news item per brand
    pub fn search_task(&self, brand_name: &str, competitors: &[Competitor]) -> Result<TaskSpec> {
        let vars = TaskVars::new(brand_name, competitors)?;
        self.task("search", AgentKind::Search, &vars, false)
    }

    /// Stage 2: score the sentiment of what stage 1 found
    pub fn sentiment_task(&self) -> Result<TaskSpec> {
        self.task("sentiment", AgentKind::Sentiment, &json!({}), true)
    }

    /// Stage 3: price metrics for the brand and competitor tickers
    pub fn finance_task(&self, brand_name: &str, competitors: &[Competitor]) -> Result<TaskSpec> {
        let vars = TaskVars::new(brand_name, competitors)?;
        self.task("finance", AgentKind::Finance, &vars, true)
    }

    /// Stage 4: rank the brand against its competitors
    pub fn comparison_task(
        &self,
        brand_name: &str,
        competitors: &[Competitor],
    ) -> Result<TaskSpec> {
        let vars = TaskVars::new(brand_name, competitors)?;
        self.task("comparison", AgentKind::Comparison, &vars, true)
    }

    /// Stage 5: the executive Markdown report
    pub fn report_task(&self, brand_name: &str) -> Result<TaskSpec> {
        self.task(
            "report",
            AgentKind::Report,
            &json!({ "brand_name": brand_name.trim() }),
            true,
        )
    }

    /// All five tasks in pipeline order
    pub fn all(&self, brand_name: &str, competitors: &[Competitor]) -> Result<Vec<TaskSpec>> {
        Ok(vec![
            self.search_task(brand_name, competitors)?,
            self.sentiment_task()?,
            self.finance_task(brand_name, competitors)?,
            self.comparison_task(brand_name, competitors)?,
            self.report_task(brand_name)?,
        ])
    }
}
