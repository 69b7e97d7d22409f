//! Brand monitoring crew: five agents run as one sequential pipeline

use crate::agents::{AgentRoster, LlmBinding};
use crate::api::{AlphaVantageClient, SerperClient};
use crate::config::BrandConfig;
use crate::error::{BrandError, Result};
use crate::finance::{FinancialDataClient, MarketData};
use crate::models::{AnalysisRequest, Competitor};
use crate::prompts::prompt_registry;
use crate::search::WebSearchClient;
use crate::tasks::BrandTasks;
use agent_core::Context;
use agent_llm::LLMProvider;
use agent_llm::providers::{OpenAIConfig, OpenAIProvider};
use agent_workflow::{Pipeline, Stage};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, instrument};
use uuid::Uuid;

/// Something that turns an analysis request into a report
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BrandAnalyzer: Send + Sync {
    async fn analyze(&self, request: AnalysisRequest) -> Result<String>;
}

/// Runs Search → Sentiment → Finance → Comparison → Report
#[derive(Debug, Clone)]
pub struct BrandCrew {
    roster: AgentRoster,
    tasks: BrandTasks,
    verbose: bool,
}

impl BrandCrew {
    /// Wire the crew to the providers named in `config`
    pub fn new(config: &BrandConfig) -> Result<Self> {
        let timeout_secs = config.request_timeout.as_secs();
        let provider = OpenAIProvider::with_config(
            OpenAIConfig::new(&config.llm_api_key)
                .with_api_base(&config.llm_api_base)
                .with_timeout(timeout_secs),
        )?;

        let serper = SerperClient::new(
            &config.serper_api_key,
            &config.serper_api_url,
            config.request_timeout,
        )?;
        let alpha_vantage = config
            .alpha_vantage_api_key
            .as_deref()
            .map(|key| {
                AlphaVantageClient::new(key, &config.alpha_vantage_api_url, config.request_timeout)
            })
            .transpose()?;

        Self::with_components(
            Arc::new(provider),
            config,
            WebSearchClient::new(serper, config.search_result_limit),
            FinancialDataClient::new(Arc::new(MarketData::new(alpha_vantage)), config.history_days),
        )
    }

    /// Wire the crew to explicit collaborators
    pub fn with_components(
        provider: Arc<dyn LLMProvider>,
        config: &BrandConfig,
        search: WebSearchClient,
        finance: FinancialDataClient,
    ) -> Result<Self> {
        let prompts = Arc::new(prompt_registry()?);
        let binding = LlmBinding::from_config(provider, config);
        let roster = AgentRoster::build(&binding, &prompts, search, finance)?;

        info!(
            model = %binding.model,
            max_iterations = binding.max_iterations,
            "Brand crew ready"
        );

        Ok(Self {
            roster,
            tasks: BrandTasks::new(prompts),
            verbose: config.verbose,
        })
    }

    /// Build the five-stage pipeline for one brand
    ///
    /// Inputs are validated here, before any agent runs.
    pub fn pipeline(&self, brand_name: &str, competitors: &[Competitor]) -> Result<Pipeline> {
        let mut builder = Pipeline::builder().verbose(self.verbose);
        for task in self.tasks.all(brand_name, competitors)? {
            let stage = Stage::new(task.stage, self.roster.get(task.agent), task.prompt());
            builder = builder.stage(if task.uses_context {
                stage.with_context()
            } else {
                stage
            });
        }
        Ok(builder.build()?)
    }

    /// Run every stage and return the report stage's raw output
    #[instrument(skip(self, competitors), fields(competitors = competitors.len()))]
    pub async fn run(&self, brand_name: &str, competitors: &[Competitor]) -> Result<String> {
        let pipeline = self.pipeline(brand_name, competitors)?;
        let run_id = Uuid::new_v4().to_string();
        let mut context = Context::new()
            .with_run_id(run_id.as_str())
            .with_brand_name(brand_name.trim());

        info!(%run_id, "Brand analysis started");
        match pipeline.execute(&mut context).await {
            Ok(report) => {
                info!(%run_id, report_length = report.len(), "Brand analysis completed");
                Ok(report)
            }
            Err(e) => {
                error!(%run_id, error = %e, "Brand analysis failed");
                Err(BrandError::from(e))
            }
        }
    }
}

#[async_trait]
impl BrandAnalyzer for BrandCrew {
    async fn analyze(&self, request: AnalysisRequest) -> Result<String> {
        self.run(&request.brand_name, &request.competitors).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::finance::testing::FakeMarketData;
    use agent_llm::{
        CompletionRequest, CompletionResponse, LLMError, Message, StopReason, TokenUsage,
    };
    use std::sync::Mutex;
    use std::time::Duration;

    pub const NIKE_REPORT: &str = "# 📊 Brand Monitoring Report: Nike\n\n\
        ## 1. Public Sentiment Overview\n- Score: 0.60\n\n\
        ## 2. Financial Summary\n- Weekly change: +1.25%\n\n\
        ## 3. Competitor Comparison\n| Brand | Verdict |\n|---|---|\n| Nike | 🟢 |\n\n\
        ## 4. Key Insights\n- Nike leads\n\n\
        ## 5. Recommendations\n- Keep investing in sustainability";

    /// Answers by agent role; the role is read from the system prompt
    pub struct RoleProvider {
        pub fail_role: Option<&'static str>,
        pub calls: Mutex<Vec<(String, String)>>,
    }

    impl RoleProvider {
        pub fn new(fail_role: Option<&'static str>) -> Arc<Self> {
            Arc::new(Self {
                fail_role,
                calls: Mutex::new(Vec::new()),
            })
        }

        pub fn roles(&self) -> Vec<String> {
            self.calls.lock().unwrap().iter().map(|(r, _)| r.clone()).collect()
        }
    }

    fn role_of(request: &CompletionRequest) -> String {
        request
            .system
            .as_deref()
            .and_then(|s| s.strip_prefix("You are "))
            .and_then(|s| s.split_once(". "))
            .map(|(role, _)| role.to_string())
            .unwrap_or_default()
    }

    #[async_trait]
    impl LLMProvider for RoleProvider {
        async fn complete(
            &self,
            request: CompletionRequest,
        ) -> agent_llm::Result<CompletionResponse> {
            let role = role_of(&request);
            let prompt = request
                .messages
                .first()
                .and_then(Message::text)
                .unwrap_or_default();
            self.calls.lock().unwrap().push((role.clone(), prompt));

            if self.fail_role == Some(role.as_str()) {
                return Err(LLMError::RequestFailed("LLM unavailable".into()));
            }

            let text = match role.as_str() {
                "Search Agent" => "Nike launches eco-friendly shoes (CNN)",
                "Sentiment Analyst Agent" => "Nike: 0.60, Adidas: 0.45",
                "Financial Intelligence Analyst" => "NKE $98.40 +1.25%",
                "Competitive Intelligence Analyst" => "| Nike | 🟢 Best performance |",
                "Executive Reporting Specialist" => NIKE_REPORT,
                _ => "unknown role",
            };
            Ok(CompletionResponse {
                message: Message::assistant(text),
                stop_reason: StopReason::EndTurn,
                usage: TokenUsage::default(),
            })
        }

        fn name(&self) -> &str {
            "role-fake"
        }
    }

    pub fn test_config() -> BrandConfig {
        BrandConfig::builder()
            .llm_api_key("test")
            .serper_api_key("test")
            .max_iterations(3)
            .verbose(false)
            .build()
            .unwrap()
    }

    pub fn crew_with(provider: Arc<RoleProvider>) -> BrandCrew {
        let serper =
            SerperClient::new("key", "http://localhost:1", Duration::from_secs(1)).unwrap();
        BrandCrew::with_components(
            provider,
            &test_config(),
            WebSearchClient::new(serper, 4),
            FinancialDataClient::new(Arc::new(FakeMarketData::default()), 30),
        )
        .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{NIKE_REPORT, RoleProvider, crew_with};
    use super::*;
    use crate::error::MISSING_INPUTS;
    use agent_workflow::CONTEXT_HEADER;

    fn competitors() -> Vec<Competitor> {
        vec![Competitor::new("Adidas", "ADDYY")]
    }

    #[tokio::test]
    async fn test_run_executes_stages_in_order() {
        let provider = RoleProvider::new(None);
        let crew = crew_with(provider.clone());

        let report = crew.run("Nike", &competitors()).await.unwrap();

        assert_eq!(report, NIKE_REPORT);
        assert_eq!(
            provider.roles(),
            vec![
                "Search Agent",
                "Sentiment Analyst Agent",
                "Financial Intelligence Analyst",
                "Competitive Intelligence Analyst",
                "Executive Reporting Specialist",
            ]
        );
    }

    #[tokio::test]
    async fn test_later_stages_receive_earlier_outputs() {
        let provider = RoleProvider::new(None);
        crew_with(provider.clone())
            .run("Nike", &competitors())
            .await
            .unwrap();

        let calls = provider.calls.lock().unwrap();
        assert!(!calls[0].1.contains(CONTEXT_HEADER));

        let report_prompt = &calls[4].1;
        assert!(report_prompt.contains(CONTEXT_HEADER));
        for earlier in [
            "Nike launches eco-friendly shoes (CNN)",
            "Nike: 0.60, Adidas: 0.45",
            "NKE $98.40 +1.25%",
            "| Nike | 🟢 Best performance |",
        ] {
            assert!(report_prompt.contains(earlier), "{earlier}");
        }
    }

    #[tokio::test]
    async fn test_stage_failure_stops_run() {
        let provider = RoleProvider::new(Some("Financial Intelligence Analyst"));
        let err = crew_with(provider.clone())
            .run("Nike", &competitors())
            .await
            .unwrap_err();

        assert!(err.to_string().starts_with("Stage 'finance' failed"));
        assert!(err.to_string().contains("LLM unavailable"));
        assert_eq!(provider.roles().len(), 3);
    }

    #[tokio::test]
    async fn test_invalid_inputs_fail_before_any_llm_call() {
        let provider = RoleProvider::new(None);
        let crew = crew_with(provider.clone());

        let err = crew.run("Nike", &[]).await.unwrap_err();
        assert_eq!(err.to_string(), MISSING_INPUTS);

        let err = crew.run(" ", &competitors()).await.unwrap_err();
        assert_eq!(err.to_string(), MISSING_INPUTS);
        assert!(provider.roles().is_empty());
    }

    #[tokio::test]
    async fn test_analyze_delegates_to_run() {
        let crew = crew_with(RoleProvider::new(None));
        let report = crew
            .analyze(AnalysisRequest {
                brand_name: "Nike".into(),
                competitors: competitors(),
            })
            .await
            .unwrap();
        assert!(report.contains("## 5. Recommendations"));
    }

    #[test]
    fn test_pipeline_has_five_stages() {
        let crew = crew_with(RoleProvider::new(None));
        let pipeline = crew.pipeline("Nike", &competitors()).unwrap();
        let names: Vec<&str> = pipeline.stages().iter().map(Stage::name).collect();
        assert_eq!(names, crate::tasks::STAGES);
        assert!(!pipeline.stages()[0].uses_context());
    }
}
