//! Sequential multi-agent pipelines
//!
//! A pipeline runs its stages strictly in order. Every stage sees its own
//! task prompt and, when it asks for it, the outputs of all earlier stages.
//! The first failing stage aborts the run.

pub mod pipeline;

pub use pipeline::{CONTEXT_HEADER, Pipeline, PipelineBuilder, Stage};
