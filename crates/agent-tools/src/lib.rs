//! Tool framework for brand-monitor agents
//!
//! Tools are the functions an agent's model may call mid-stage: web search,
//! financial data lookup, delegation to a coworker. Each tool answers with
//! text that goes straight back into the conversation.

pub mod registry;
pub mod tool;

pub use registry::ToolRegistry;
pub use tool::Tool;
