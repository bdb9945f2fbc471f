//! ewebsock-check - runs the project's quality gates in order, fail-fast

pub mod cli;
pub mod core;
pub mod execution;

// Re-export commonly used types
pub use core::{CheckStep, CommandSpec, Pipeline, PipelineState, ExecutionStatus};
pub use core::config::PipelineConfig;
pub use execution::{
    ExecutionEngine, ExecutionEvent, OutputSink, ProcessRunner, StepError, StepRunner,
};
