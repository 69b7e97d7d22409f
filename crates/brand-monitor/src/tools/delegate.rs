//! Tool for handing a sub-task to another agent

use agent_core::{Agent, Context, Result as AgentResult};
use agent_llm::tools::schema;
use agent_tools::Tool;
use agent_workflow::CONTEXT_HEADER;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{info, warn};

/// Lets an agent ask a coworker to do part of its task
///
/// The coworker starts from nothing, so the call carries the task and all
/// the context it needs. Every outcome, including a missing coworker or a
/// failed run, is returned as text.
pub struct DelegateWorkTool {
    coworkers: Vec<Arc<dyn Agent>>,
    description: String,
}

#[derive(Debug, Deserialize)]
struct DelegateParams {
    task: String,
    #[serde(default)]
    context: String,
    coworker: String,
}

impl DelegateWorkTool {
    /// Create a delegation tool over the given coworkers
    pub fn new(coworkers: Vec<Arc<dyn Agent>>) -> Self {
        let description = format!(
            "Delegate a specific task to one of the following coworkers: {}\n\
             The input to this tool should be the coworker, the task you want them to do, \
             and ALL necessary context to execute the task, they know nothing about the task, \
             so share absolutely everything you know, don't reference things but instead \
             explain them.",
            coworker_names(&coworkers)
        );
        Self {
            coworkers,
            description,
        }
    }

    fn find(&self, role: &str) -> Option<&Arc<dyn Agent>> {
        let role = role.trim().trim_matches('"');
        self.coworkers
            .iter()
            .find(|agent| agent.name().eq_ignore_ascii_case(role))
    }
}

fn coworker_names(coworkers: &[Arc<dyn Agent>]) -> String {
    coworkers
        .iter()
        .map(|a| a.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[async_trait]
impl Tool for DelegateWorkTool {
    async fn execute(&self, params: Value) -> AgentResult<String> {
        let params: DelegateParams =
            serde_json::from_value(params).map_err(super::invalid_params)?;

        let Some(coworker) = self.find(&params.coworker) else {
            warn!(coworker = %params.coworker, "Unknown coworker");
            return Ok(format!(
                "Error executing tool. coworker mentioned not found, it must be one of the following options:\n{}",
                self.coworkers
                    .iter()
                    .map(|a| format!("- {}", a.name().to_lowercase()))
                    .collect::<Vec<_>>()
                    .join("\n")
            ));
        };

        let prompt = if params.context.trim().is_empty() {
            params.task
        } else {
            format!("{}\n\n{CONTEXT_HEADER}\n{}", params.task, params.context.trim())
        };

        info!(coworker = coworker.name(), "Delegating work");
        let mut context = Context::new();
        match coworker.process(prompt, &mut context).await {
            Ok(answer) => Ok(answer),
            Err(e) => {
                warn!(coworker = coworker.name(), error = %e, "Delegated task failed");
                Ok(format!("Error executing delegated task: {e}"))
            }
        }
    }

    fn name(&self) -> &'static str {
        "delegate_work_to_coworker"
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn input_schema(&self) -> Value {
        schema::object(
            json!({
                "task": schema::string("The task to delegate"),
                "context": schema::string("The context for the task"),
                "coworker": schema::string("The role/name of the coworker to delegate to"),
            }),
            &["task", "context", "coworker"],
        )
    }
}
