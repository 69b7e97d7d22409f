//! Core abstractions for the brand-monitor agent stack
//!
//! This crate defines the `Agent` trait, the per-run `Context`, and the
//! shared error type used by every other crate in the workspace.

pub mod agent;
pub mod context;
pub mod error;

pub use agent::Agent;
pub use context::{Context, StageRecord};
pub use error::{Error, Result};
