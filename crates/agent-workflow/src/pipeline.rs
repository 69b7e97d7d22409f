//! Pipeline definition and execution

use agent_core::{Agent, Context, Error, Result};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};

/// Heading placed before earlier stage outputs in a stage prompt
pub const CONTEXT_HEADER: &str = "This is the context you're working with:";

/// One step of a pipeline: a task prompt bound to the agent that performs it
#[derive(Clone)]
pub struct Stage {
    name: String,
    agent: Arc<dyn Agent>,
    prompt: String,
    uses_context: bool,
}

impl Stage {
    /// Create a stage that sees only its own prompt
    pub fn new(name: impl Into<String>, agent: Arc<dyn Agent>, prompt: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            agent,
            prompt: prompt.into(),
            uses_context: false,
        }
    }

    /// Give the stage the outputs of every earlier stage
    pub fn with_context(mut self) -> Self {
        self.uses_context = true;
        self
    }

    /// Stage name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Agent bound to this stage
    pub fn agent(&self) -> &Arc<dyn Agent> {
        &self.agent
    }

    /// Task prompt, before any context is appended
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Whether earlier outputs are appended to the prompt
    pub fn uses_context(&self) -> bool {
        self.uses_context
    }

    /// Prompt actually sent to the agent for this run
    pub fn render_input(&self, context: &Context) -> String {
        match context.accumulated_output() {
            Some(previous) if self.uses_context => {
                format!("{}\n\n{CONTEXT_HEADER}\n{previous}", self.prompt)
            }
            _ => self.prompt.clone(),
        }
    }
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage")
            .field("name", &self.name)
            .field("agent", &self.agent.name())
            .field("uses_context", &self.uses_context)
            .finish_non_exhaustive()
    }
}

/// A fixed, ordered list of stages
///
/// # Example
///
/// ```no_run
/// use agent_core::{Agent, Context};
/// use agent_workflow::{Pipeline, Stage};
/// use std::sync::Arc;
///
/// # async fn example(search: Arc<dyn Agent>, report: Arc<dyn Agent>) -> agent_core::Result<()> {
/// let pipeline = Pipeline::builder()
///     .stage(Stage::new("search", search, "Find news about Nike"))
///     .stage(Stage::new("report", report, "Write the report").with_context())
///     .build()?;
///
/// let mut context = Context::new();
/// let report = pipeline.execute(&mut context).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Pipeline {
    stages: Vec<Stage>,
    verbose: bool,
}

impl Pipeline {
    /// Create a new pipeline builder
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::default()
    }

    /// Stages in execution order
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Run every stage in order and return the last stage's output
    ///
    /// Each output is recorded in `context` before the next stage starts. On
    /// failure the run stops and the error names the failing stage; outputs
    /// of the stages that did complete stay in `context`.
    pub async fn execute(&self, context: &mut Context) -> Result<String> {
        let started = Instant::now();

        for (index, stage) in self.stages.iter().enumerate() {
            let stage_started = Instant::now();
            context.set_current_stage(stage.name());

            info!(
                stage = %stage.name,
                agent = stage.agent.name(),
                position = index + 1,
                total = self.stages.len(),
                "Stage started"
            );

            let input = stage.render_input(context);
            if self.verbose {
                info!(stage = %stage.name, input = %input, "Stage input");
            } else {
                debug!(stage = %stage.name, input_length = input.len(), "Stage input");
            }

            let output = stage.agent.process(input, context).await.map_err(|e| {
                error!(stage = %stage.name, error = %e, "Stage failed");
                Error::StageFailed {
                    stage: stage.name.clone(),
                    message: e.to_string(),
                }
            })?;

            if self.verbose {
                info!(stage = %stage.name, output = %output, "Stage output");
            }
            info!(
                stage = %stage.name,
                duration_ms = stage_started.elapsed().as_millis() as u64,
                output_length = output.len(),
                "Stage completed"
            );

            context.record_stage(stage.name(), stage.agent.name(), output);
        }

        info!(
            stages = self.stages.len(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Pipeline completed"
        );

        context
            .last_output()
            .map(str::to_string)
            .ok_or_else(|| Error::ProcessingFailed("Pipeline produced no output".to_string()))
    }
}

/// Builder for constructing pipelines
#[derive(Default)]
pub struct PipelineBuilder {
    stages: Vec<Stage>,
    verbose: bool,
}

impl PipelineBuilder {
    /// Append a stage
    pub fn stage(mut self, stage: Stage) -> Self {
        self.stages.push(stage);
        self
    }

    /// Log full stage inputs and outputs at info level
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Build the pipeline
    ///
    /// Fails if there are no stages or two stages share a name.
    pub fn build(self) -> Result<Pipeline> {
        if self.stages.is_empty() {
            return Err(Error::InitializationFailed(
                "Pipeline needs at least one stage".to_string(),
            ));
        }

        for (i, stage) in self.stages.iter().enumerate() {
            if self.stages[..i].iter().any(|s| s.name == stage.name) {
                return Err(Error::InitializationFailed(format!(
                    "Duplicate stage name '{}'",
                    stage.name
                )));
            }
        }

        Ok(Pipeline {
            stages: self.stages,
            verbose: self.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records every input it receives and answers with a fixed reply
    struct Recorder {
        name: String,
        reply: Option<String>,
        inputs: Mutex<Vec<String>>,
    }

    impl Recorder {
        fn ok(name: &str, reply: &str) -> Arc<Self> {
            Arc::new(Self {
                name: name.into(),
                reply: Some(reply.into()),
                inputs: Mutex::new(Vec::new()),
            })
        }

        fn failing(name: &str) -> Arc<Self> {
            Arc::new(Self {
                name: name.into(),
                reply: None,
                inputs: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> usize {
            self.inputs.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Agent for Recorder {
        async fn process(&self, input: String, _context: &mut Context) -> Result<String> {
            self.inputs.lock().unwrap().push(input);
            self.reply
                .clone()
                .ok_or_else(|| Error::ProcessingFailed("LLM unavailable".into()))
        }

        fn name(&self) -> &str {
            &self.name
        }
    }

    #[test]
    fn test_empty_pipeline_rejected() {
        assert!(matches!(
            Pipeline::builder().build(),
            Err(Error::InitializationFailed(_))
        ));
    }

    #[test]
    fn test_duplicate_stage_names_rejected() {
        let a = Recorder::ok("A", "x");
        let err = Pipeline::builder()
            .stage(Stage::new("search", a.clone(), "p"))
            .stage(Stage::new("search", a, "p"))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("Duplicate stage name 'search'"));
    }

    #[tokio::test]
    async fn test_stages_run_in_order_with_cumulative_context() {
        let search = Recorder::ok("Search Agent", "news");
        let sentiment = Recorder::ok("Sentiment Analyst Agent", "scores");
        let report = Recorder::ok("Executive Reporting Specialist", "# Report");

        let pipeline = Pipeline::builder()
            .stage(Stage::new("search", search.clone(), "find news").with_context())
            .stage(Stage::new("sentiment", sentiment.clone(), "score it").with_context())
            .stage(Stage::new("report", report.clone(), "write it").with_context())
            .build()
            .unwrap();

        let mut ctx = Context::new();
        let out = pipeline.execute(&mut ctx).await.unwrap();

        assert_eq!(out, "# Report");
        assert_eq!(search.inputs.lock().unwrap()[0], "find news");
        assert_eq!(
            sentiment.inputs.lock().unwrap()[0],
            format!("score it\n\n{CONTEXT_HEADER}\nnews")
        );
        assert_eq!(
            report.inputs.lock().unwrap()[0],
            format!("write it\n\n{CONTEXT_HEADER}\nnews\n\n----------\n\nscores")
        );

        let stages: Vec<&str> = ctx.stage_records().iter().map(|r| r.stage.as_str()).collect();
        assert_eq!(stages, vec!["search", "sentiment", "report"]);
    }

    #[tokio::test]
    async fn test_stage_without_context_sees_only_prompt() {
        let first = Recorder::ok("A", "one");
        let second = Recorder::ok("B", "two");
        let pipeline = Pipeline::builder()
            .stage(Stage::new("a", first, "p1"))
            .stage(Stage::new("b", second.clone(), "p2"))
            .build()
            .unwrap();

        pipeline.execute(&mut Context::new()).await.unwrap();
        assert_eq!(second.inputs.lock().unwrap()[0], "p2");
    }

    #[tokio::test]
    async fn test_failure_aborts_remaining_stages() {
        let search = Recorder::ok("Search Agent", "news");
        let finance = Recorder::failing("Financial Intelligence Analyst");
        let report = Recorder::ok("Executive Reporting Specialist", "# Report");

        let pipeline = Pipeline::builder()
            .stage(Stage::new("search", search, "p"))
            .stage(Stage::new("finance", finance.clone(), "p").with_context())
            .stage(Stage::new("report", report.clone(), "p").with_context())
            .build()
            .unwrap();

        let mut ctx = Context::new();
        let err = pipeline.execute(&mut ctx).await.unwrap_err();

        assert!(matches!(err, Error::StageFailed { ref stage, .. } if stage == "finance"));
        assert!(err.to_string().contains("LLM unavailable"));
        assert_eq!(finance.calls(), 1);
        assert_eq!(report.calls(), 0);
        assert_eq!(ctx.stage_records().len(), 1);
        assert_eq!(ctx.current_stage(), Some("finance"));
    }
}
