//! Persona prompt shared by all brand agents

use agent_prompt::{JinjaTemplate, Result};

/// System prompt built from an agent's role, backstory and goal
pub fn agent_system() -> Result<JinjaTemplate> {
    JinjaTemplate::new(
        "brand.agent_system",
        "You are {{ role }}. {{ backstory }}\nYour personal goal is: {{ goal }}",
    )
}
