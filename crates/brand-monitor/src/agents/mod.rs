//! The five brand monitoring agents

pub mod personas;
mod roster;

pub use roster::{AgentRoster, LlmBinding};

use serde::Serialize;
use std::fmt;

/// Static description of one agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgentSpec {
    pub role: &'static str,
    pub goal: &'static str,
    pub backstory: &'static str,
    pub allow_delegation: bool,
}

/// The agents of a brand monitoring run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentKind {
    Search,
    Sentiment,
    Finance,
    Comparison,
    Report,
}

impl AgentKind {
    /// Every agent, in pipeline order
    pub const ALL: [Self; 5] = [
        Self::Search,
        Self::Sentiment,
        Self::Finance,
        Self::Comparison,
        Self::Report,
    ];

    pub fn spec(self) -> &'static AgentSpec {
        match self {
            Self::Search => &personas::SEARCH,
            Self::Sentiment => &personas::SENTIMENT,
            Self::Finance => &personas::FINANCE,
            Self::Comparison => &personas::COMPARISON,
            Self::Report => &personas::REPORT,
        }
    }

    pub fn role(self) -> &'static str {
        self.spec().role
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.role())
    }
}
