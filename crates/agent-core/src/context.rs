//! Execution context for a single pipeline run
//!
//! The `Context` struct is created fresh for every run. It carries run
//! metadata (run ID, brand under analysis) and the ordered record of stage
//! outputs produced so far.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Well-known context keys
pub mod keys {
    /// Unique ID of the current run, used for log correlation
    pub const RUN_ID: &str = "run_id";
    /// Brand being analysed
    pub const BRAND_NAME: &str = "brand_name";
    /// Name of the stage currently executing
    pub const CURRENT_STAGE: &str = "current_stage";
}

/// Raw output of one completed stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageRecord {
    /// Stage name (e.g. "search")
    pub stage: String,
    /// Name of the agent that produced the output
    pub agent: String,
    /// Unparsed stage output
    pub output: String,
}

/// Context passed to agents during execution
///
/// # Example
///
/// ```
/// use agent_core::Context;
///
/// let mut ctx = Context::new().with_run_id("run-1").with_brand_name("Nike");
/// ctx.record_stage("search", "Search Agent", "Nike launches ...");
///
/// assert_eq!(ctx.run_id(), Some("run-1"));
/// assert_eq!(ctx.stage_records().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Context {
    metadata: HashMap<&'static str, String>,
    stages: Vec<StageRecord>,
}

impl Context {
    /// Create a new empty context
    pub fn new() -> Self {
        Self::default()
    }

    // =========== Builder Methods ===========

    /// Set the run ID
    pub fn with_run_id(mut self, run_id: impl Into<String>) -> Self {
        self.metadata.insert(keys::RUN_ID, run_id.into());
        self
    }

    /// Set the brand under analysis
    pub fn with_brand_name(mut self, brand: impl Into<String>) -> Self {
        self.metadata.insert(keys::BRAND_NAME, brand.into());
        self
    }

    // =========== Common Accessors ===========

    /// Get the run ID
    pub fn run_id(&self) -> Option<&str> {
        self.metadata.get(keys::RUN_ID).map(String::as_str)
    }

    /// Get the brand under analysis
    pub fn brand_name(&self) -> Option<&str> {
        self.metadata.get(keys::BRAND_NAME).map(String::as_str)
    }

    /// Get the stage currently executing
    pub fn current_stage(&self) -> Option<&str> {
        self.metadata.get(keys::CURRENT_STAGE).map(String::as_str)
    }

    /// Mark a stage as the one currently executing
    pub fn set_current_stage(&mut self, stage: impl Into<String>) {
        self.metadata.insert(keys::CURRENT_STAGE, stage.into());
    }

    // =========== Stage Outputs ===========

    /// Append the output of a completed stage
    pub fn record_stage(
        &mut self,
        stage: impl Into<String>,
        agent: impl Into<String>,
        output: impl Into<String>,
    ) {
        self.stages.push(StageRecord {
            stage: stage.into(),
            agent: agent.into(),
            output: output.into(),
        });
    }

    /// Outputs of all completed stages, in execution order
    pub fn stage_records(&self) -> &[StageRecord] {
        &self.stages
    }

    /// Output of the most recently completed stage
    pub fn last_output(&self) -> Option<&str> {
        self.stages.last().map(|r| r.output.as_str())
    }

    /// Cumulative context string built from every completed stage
    ///
    /// Returns `None` before the first stage has completed.
    pub fn accumulated_output(&self) -> Option<String> {
        if self.stages.is_empty() {
            return None;
        }
        Some(
            self.stages
                .iter()
                .map(|r| r.output.trim())
                .collect::<Vec<_>>()
                .join("\n\n----------\n\n"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context_has_no_metadata() {
        let ctx = Context::new();
        assert!(ctx.run_id().is_none());
        assert!(ctx.brand_name().is_none());
        assert!(ctx.current_stage().is_none());
    }

    #[test]
    fn test_run_metadata() {
        let mut ctx = Context::new().with_run_id("run-42").with_brand_name("Nike");
        ctx.set_current_stage("search");

        assert_eq!(ctx.run_id(), Some("run-42"));
        assert_eq!(ctx.brand_name(), Some("Nike"));
        assert_eq!(ctx.current_stage(), Some("search"));
    }

    #[test]
    fn test_accumulated_output_empty_before_first_stage() {
        let ctx = Context::new();
        assert!(ctx.accumulated_output().is_none());
        assert!(ctx.last_output().is_none());
    }

    #[test]
    fn test_accumulated_output_keeps_order() {
        let mut ctx = Context::new();
        ctx.record_stage("search", "Search Agent", "news items\n");
        ctx.record_stage("sentiment", "Sentiment Analyst Agent", "scores");

        let joined = ctx.accumulated_output().unwrap();
        assert_eq!(joined, "news items\n\n----------\n\nscores");
        assert_eq!(ctx.last_output(), Some("scores"));
        assert_eq!(ctx.stage_records()[0].stage, "search");
        assert_eq!(ctx.stage_records()[1].agent, "Sentiment Analyst Agent");
    }
}
