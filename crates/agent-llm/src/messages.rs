//! Message types for LLM communication
//!
//! A conversation is a list of messages, each a list of content blocks. Text,
//! tool calls requested by the assistant and tool results fed back by the
//! caller all travel as blocks so one stage's tool loop stays in one list.

use serde::{Deserialize, Serialize};

/// Message role in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// User message (instructions and tool results)
    User,
    /// Assistant message
    Assistant,
}

/// A tool invocation requested by the assistant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Provider-assigned call ID, echoed back in the tool result
    pub id: String,
    /// Tool name
    pub name: String,
    /// Tool input parameters (JSON)
    pub input: serde_json::Value,
}

/// Content block in a message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Plain text content
    Text {
        /// Text content
        text: String,
    },

    /// Tool use request from assistant
    ToolUse(ToolCall),

    /// Tool result from user
    ToolResult {
        /// ID of the tool call this is responding to
        tool_use_id: String,
        /// Result text
        content: String,
        /// Whether this is an error result
        #[serde(default, skip_serializing_if = "std::ops::Not::not")]
        is_error: bool,
    },
}

/// A message in the conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Message role
    pub role: Role,

    /// Message content
    pub content: Vec<ContentBlock>,
}

impl Message {
    /// Create a user message with text
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: vec![ContentBlock::Text { text: text.into() }],
        }
    }

    /// Create an assistant message with text
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: vec![ContentBlock::Text { text: text.into() }],
        }
    }

    /// Create a user message carrying a tool result
    pub fn tool_result(tool_use_id: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: vec![ContentBlock::ToolResult {
                tool_use_id: tool_use_id.into(),
                content: result.into(),
                is_error: false,
            }],
        }
    }

    /// Create a user message carrying a failed tool result
    pub fn tool_error(tool_use_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: vec![ContentBlock::ToolResult {
                tool_use_id: tool_use_id.into(),
                content: error.into(),
                is_error: true,
            }],
        }
    }

    /// Concatenated text of all text blocks, or `None` if there are none
    pub fn text(&self) -> Option<String> {
        let parts: Vec<&str> = self
            .content
            .iter()
            .filter_map(|b| match b {
                ContentBlock::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join("\n"))
        }
    }

    /// Tool calls requested in this message
    pub fn tool_calls(&self) -> Vec<&ToolCall> {
        self.content
            .iter()
            .filter_map(|b| match b {
                ContentBlock::ToolUse(call) => Some(call),
                _ => None,
            })
            .collect()
    }

    /// Check if this message requests any tool calls
    pub fn has_tool_calls(&self) -> bool {
        self.content
            .iter()
            .any(|b| matches!(b, ContentBlock::ToolUse(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_message() {
        let msg = Message::user("Find Nike news");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.text().as_deref(), Some("Find Nike news"));
    }

    #[test]
    fn test_text_joins_blocks() {
        let msg = Message {
            role: Role::Assistant,
            content: vec![
                ContentBlock::Text {
                    text: "first".into(),
                },
                ContentBlock::ToolUse(ToolCall {
                    id: "call_1".into(),
                    name: "web_search".into(),
                    input: json!({"query": "Nike"}),
                }),
                ContentBlock::Text {
                    text: "second".into(),
                },
            ],
        };
        assert_eq!(msg.text().as_deref(), Some("first\nsecond"));
        assert!(msg.has_tool_calls());
        assert_eq!(msg.tool_calls()[0].name, "web_search");
    }

    #[test]
    fn test_tool_result_has_no_text() {
        let msg = Message::tool_result("call_1", "Title: ...");
        assert_eq!(msg.role, Role::User);
        assert!(msg.text().is_none());
        assert!(!msg.has_tool_calls());
    }

    #[test]
    fn test_tool_error_flag_serialization() {
        let ok = serde_json::to_value(Message::tool_result("a", "x")).unwrap();
        assert!(ok["content"][0].get("is_error").is_none());

        let err = serde_json::to_value(Message::tool_error("a", "boom")).unwrap();
        assert_eq!(err["content"][0]["is_error"], true);
    }
}
