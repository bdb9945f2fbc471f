//! Pipeline domain model

use crate::core::{
    config::PipelineConfig,
    step::CheckStep,
    state::PipelineState,
};

/// An ordered list of checks plus the state of the current run
#[derive(Debug, Clone)]
pub struct Pipeline {
    /// Pipeline name
    pub name: String,

    /// Steps in execution order
    steps: Vec<CheckStep>,

    /// Execution state
    pub state: PipelineState,
}

impl Pipeline {
    /// Create a pipeline from configuration
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(
            config.name.clone(),
            config.steps.iter().map(CheckStep::from_config).collect(),
        )
    }

    pub fn new(name: impl Into<String>, steps: Vec<CheckStep>) -> Self {
        Pipeline {
            name: name.into(),
            steps,
            state: PipelineState::new(),
        }
    }

    /// Steps in execution order
    pub fn steps(&self) -> &[CheckStep] {
        &self.steps
    }

    /// Get a step by index
    pub fn step(&self, index: usize) -> Option<&CheckStep> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
