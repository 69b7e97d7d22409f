//! MiniJinja-based template implementation

use crate::{PromptError, Result};
use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

/// A named prompt template backed by MiniJinja
#[derive(Clone)]
pub struct JinjaTemplate {
    name: String,
    source: String,
}

impl JinjaTemplate {
    /// Create a template, rejecting invalid Jinja syntax up front
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Result<Self> {
        let template = Self {
            name: name.into(),
            source: source.into(),
        };

        environment()
            .template_from_str(&template.source)
            .map_err(|e| PromptError::TemplateParseFailed {
                name: template.name.clone(),
                detail: e.to_string(),
            })?;

        Ok(template)
    }

    /// Template name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw template source
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Render with the given variables
    pub fn render<S: Serialize>(&self, vars: &S) -> Result<String> {
        let value = minijinja::Value::from_serialize(vars);
        environment()
            .render_str(&self.source, value)
            .map_err(|e| PromptError::RenderError {
                name: self.name.clone(),
                detail: e.to_string(),
            })
    }
}

fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_keep_trailing_newline(true);
    env.add_filter("upper", |s: String| s.to_uppercase());
    env.add_filter("trim", |s: String| s.trim().to_string());
    env
}

impl std::fmt::Debug for JinjaTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JinjaTemplate")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
