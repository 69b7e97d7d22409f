//! Agent runtime
//!
//! `AgentExecutor` drives the LLM ↔ tool loop for one task; `ToolAgent`
//! wraps an executor behind the `Agent` trait so pipelines can run it.

pub mod agents;
pub mod executor;

#[cfg(test)]
pub(crate) mod testing;

pub use agents::ToolAgent;
pub use executor::{AgentExecutor, AgentExecutorBuilder, ExecutorConfig};
