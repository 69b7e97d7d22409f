//! Shared utilities for brand-monitor
//!
//! Logging setup and helpers for reading typed settings from the
//! environment.

pub mod config;
pub mod logging;

pub use config::{EnvError, env_or, env_parse, env_string};
pub use logging::{LogFormat, init_tracing};
