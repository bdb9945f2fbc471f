//! Pipeline execution engine

pub mod engine;
pub mod error;
pub mod runner;
pub mod sink;

pub use engine::{ExecutionEngine, ExecutionEvent, EventHandler};
pub use error::StepError;
pub use runner::{ProcessRunner, StepOutcome, StepRunner};
pub use sink::{CaptureBuffer, OutputSink};
