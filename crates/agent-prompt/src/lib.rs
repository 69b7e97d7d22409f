//! Prompt templates for agents and tasks
//!
//! Templates use Jinja2 syntax (`{{ variable }}`) through MiniJinja and are
//! checked for syntax errors when created. Rendering is strict: a variable
//! the template mentions but the caller did not supply is an error, not an
//! empty string.
//!
//! ```
//! use agent_prompt::{JinjaTemplate, PromptRegistry};
//! use serde_json::json;
//!
//! let registry = PromptRegistry::new()
//!     .with_template(JinjaTemplate::new("search", "Find news about {{ brand_name }}").unwrap());
//!
//! let prompt = registry.render("search", &json!({ "brand_name": "Nike" })).unwrap();
//! assert_eq!(prompt, "Find news about Nike");
//! ```

mod error;
mod jinja;
mod registry;

pub use error::{PromptError, Result};
pub use jinja::JinjaTemplate;
pub use registry::PromptRegistry;
