//! Core Agent trait definition

use crate::{Context, Result};
use async_trait::async_trait;

/// Core trait that all agents must implement
///
/// An agent receives a fully rendered instruction (task description plus any
/// upstream context) and answers with free text. Stage outputs are never
/// parsed by the pipeline, so the contract stays `String` in, `String` out.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Process input and return output
    async fn process(&self, input: String, context: &mut Context) -> Result<String>;

    /// Get the agent's name
    fn name(&self) -> &str;

    /// Whether this agent may hand sub-work to its coworkers
    fn allows_delegation(&self) -> bool {
        false
    }
}
