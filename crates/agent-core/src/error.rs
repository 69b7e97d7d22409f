//! Error types for agent-core

use thiserror::Error;

/// Result type alias for agent-core
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for agent operations
#[derive(Error, Debug)]
pub enum Error {
    /// Generic error message
    #[error("{0}")]
    Generic(String),

    /// Agent or pipeline construction failed
    #[error("Agent initialization failed: {0}")]
    InitializationFailed(String),

    /// Agent processing failed
    #[error("Agent processing failed: {0}")]
    ProcessingFailed(String),

    /// Caller supplied inputs that cannot produce a run
    #[error("{0}")]
    InvalidInput(String),

    /// A pipeline stage failed; the run is aborted
    #[error("Stage '{stage}' failed: {message}")]
    StageFailed { stage: String, message: String },
}
