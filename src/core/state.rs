//! Execution state models

use chrono::{DateTime, Utc};
use std::time::Duration;
use uuid::Uuid;

/// Overall pipeline execution status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStatus {
    /// Pipeline has not started
    Pending,
    /// A step is currently running
    Running,
    /// Every step succeeded
    Completed,
    /// The pipeline stopped at the step with this index
    Failed { step_index: usize },
}

/// Transient state of a single run
#[derive(Debug, Clone)]
pub struct PipelineState {
    /// Unique execution ID, used to correlate log events
    pub execution_id: Uuid,

    /// Current execution status
    pub status: ExecutionStatus,

    /// Index of the step being executed, if any
    pub current_step: Option<usize>,

    /// Number of steps that have succeeded so far
    pub completed_steps: usize,

    /// When execution started
    pub started_at: Option<DateTime<Utc>>,

    /// When execution completed/failed
    pub completed_at: Option<DateTime<Utc>>,
}

impl PipelineState {
    /// Create a new pipeline state
    pub fn new() -> Self {
        Self {
            execution_id: Uuid::new_v4(),
            status: ExecutionStatus::Pending,
            current_step: None,
            completed_steps: 0,
            started_at: None,
            completed_at: None,
        }
    }

    /// Mark pipeline as started
    pub fn start(&mut self) {
        self.status = ExecutionStatus::Running;
        self.started_at = Some(Utc::now());
        self.current_step = None;
        self.completed_steps = 0;
        self.completed_at = None;
    }

    /// Make `index` the current step
    pub fn begin_step(&mut self, index: usize) {
        debug_assert!(self.current_step.is_none(), "a step is already running");
        self.current_step = Some(index);
    }

    /// The current step succeeded
    pub fn finish_step(&mut self) {
        if self.current_step.take().is_some() {
            self.completed_steps += 1;
        }
    }

    /// Mark pipeline as completed
    pub fn complete(&mut self) {
        self.status = ExecutionStatus::Completed;
        self.current_step = None;
        self.completed_at = Some(Utc::now());
    }

    /// Mark pipeline as failed at the current step
    pub fn fail(&mut self, step_index: usize) {
        self.status = ExecutionStatus::Failed { step_index };
        self.current_step = None;
        self.completed_at = Some(Utc::now());
    }

    /// Time between `start` and `complete`/`fail`; zero until the run ends
    pub fn elapsed(&self) -> Duration {
        match (self.started_at, self.completed_at) {
            (Some(started), Some(completed)) => (completed - started).to_std().unwrap_or_default(),
            _ => Duration::ZERO,
        }
    }
}

impl Default for PipelineState {
    fn default() -> Self {
        Self::new()
    }
}
