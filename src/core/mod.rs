//! Core domain models for the check pipeline
//!
//! This module defines the fundamental data structures that represent
//! the pipeline, its check steps, and the state of a run.

pub mod config;
pub mod pipeline;
pub mod step;
pub mod state;

pub use pipeline::*;
pub use step::*;
pub use state::*;
