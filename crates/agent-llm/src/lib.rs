//! LLM provider abstraction layer
//!
//! Provider-agnostic types for talking to a chat model:
//!
//! - Message types, including tool calls and tool results
//! - Completion request/response types
//! - Tool definitions for function calling
//! - The `LLMProvider` trait
//! - An OpenAI-compatible provider (behind the `openai` feature)

pub mod completion;
pub mod error;
pub mod messages;
pub mod provider;
pub mod tools;

// Re-export main types
pub use completion::{CompletionRequest, CompletionResponse, StopReason, TokenUsage};
pub use error::{LLMError, Result};
pub use messages::{ContentBlock, Message, Role, ToolCall};
pub use provider::LLMProvider;
pub use tools::ToolDefinition;

// Provider implementations (feature-gated)
#[cfg(feature = "openai")]
pub mod providers;
