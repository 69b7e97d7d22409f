//! Brand monitoring prompt templates
//!
//! Templates are organized into:
//! - `system`: the persona prompt every agent runs under
//! - `tasks`: the instruction and expected-output templates of each stage

mod system;
mod tasks;

pub use system::*;
pub use tasks::*;

use agent_prompt::{PromptRegistry, Result};

/// Register every brand monitoring prompt with the given registry
pub fn register_prompts(registry: &mut PromptRegistry) -> Result<()> {
    registry.register(agent_system()?);

    registry.register(search_task()?);
    registry.register(search_expected()?);
    registry.register(sentiment_task()?);
    registry.register(sentiment_expected()?);
    registry.register(finance_task()?);
    registry.register(finance_expected()?);
    registry.register(comparison_task()?);
    registry.register(comparison_expected()?);
    registry.register(report_task()?);
    registry.register(report_expected()?);

    Ok(())
}

/// A registry holding every brand monitoring prompt
pub fn prompt_registry() -> Result<PromptRegistry> {
    let mut registry = PromptRegistry::new();
    register_prompts(&mut registry)?;
    Ok(registry)
}
