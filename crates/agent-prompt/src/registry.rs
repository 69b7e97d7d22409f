//! Named collection of prompt templates

use crate::{JinjaTemplate, PromptError, Result};
use serde::Serialize;
use std::collections::HashMap;

/// Templates looked up by name
///
/// Filled once at startup and read-only afterwards, so it can be shared
/// across concurrent runs without locking.
#[derive(Debug, Clone, Default)]
pub struct PromptRegistry {
    templates: HashMap<String, JinjaTemplate>,
}

impl PromptRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template, replacing any template with the same name
    pub fn register(&mut self, template: JinjaTemplate) {
        self.templates.insert(template.name().to_string(), template);
    }

    /// Register a template, builder style
    #[must_use]
    pub fn with_template(mut self, template: JinjaTemplate) -> Self {
        self.register(template);
        self
    }

    /// Get a template by name
    pub fn get(&self, name: &str) -> Option<&JinjaTemplate> {
        self.templates.get(name)
    }

    /// Check if a template is registered
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Render a registered template
    pub fn render<S: Serialize>(&self, name: &str, vars: &S) -> Result<String> {
        self.get(name)
            .ok_or_else(|| PromptError::TemplateNotRegistered(name.to_string()))?
            .render(vars)
    }

    /// Registered template names, sorted
    pub fn list(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered templates
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
