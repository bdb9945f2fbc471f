//! Main execution engine - runs the checks in order, stopping at the first failure

use crate::{
    core::{ExecutionStatus, Pipeline},
    execution::{OutputSink, StepError, StepRunner},
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

/// Events that can occur during pipeline execution
#[derive(Debug, Clone)]
pub enum ExecutionEvent {
    PipelineStarted {
        execution_id: Uuid,
        pipeline_name: String,
        total_steps: usize,
    },
    StepStarted {
        index: usize,
        name: String,
        command: String,
    },
    StepCompleted {
        index: usize,
        name: String,
        duration: Duration,
    },
    StepFailed {
        index: usize,
        name: String,
        error: String,
    },
    PipelineCompleted {
        execution_id: Uuid,
        status: ExecutionStatus,
        elapsed: Duration,
    },
}

/// Type for event handlers
pub type EventHandler = Arc<dyn Fn(ExecutionEvent) + Send + Sync>;

/// Main pipeline execution engine
pub struct ExecutionEngine<R> {
    runner: R,
    sink: OutputSink,
    event_handlers: Vec<EventHandler>,
}

impl<R: StepRunner> ExecutionEngine<R> {
    pub fn new(runner: R, sink: OutputSink) -> Self {
        Self {
            runner,
            sink,
            event_handlers: Vec::new(),
        }
    }

    /// Add an event handler
    pub fn add_event_handler<F>(&mut self, handler: F)
    where
        F: Fn(ExecutionEvent) + Send + Sync + 'static,
    {
        self.event_handlers.push(Arc::new(handler));
    }

    /// Emit an event to all handlers
    fn emit_event(&self, event: ExecutionEvent) {
        for handler in &self.event_handlers {
            handler(event.clone());
        }
    }

    /// Execute the entire pipeline
    ///
    /// Steps run one at a time in definition order. The first step that
    /// fails (or cannot be launched) ends the run and its error is
    /// returned; no later step is started. When every step passes, the
    /// success confirmation is written to the sink exactly once.
    pub async fn execute(&self, pipeline: &mut Pipeline) -> Result<(), StepError> {
        let execution_id = pipeline.state.execution_id;

        info!("Starting pipeline execution: {} ({})", pipeline.name, execution_id);
        pipeline.state.start();
        self.emit_event(ExecutionEvent::PipelineStarted {
            execution_id,
            pipeline_name: pipeline.name.clone(),
            total_steps: pipeline.len(),
        });

        for index in 0..pipeline.len() {
            let Some(step) = pipeline.step(index).cloned() else {
                break;
            };

            pipeline.state.begin_step(index);
            self.emit_event(ExecutionEvent::StepStarted {
                index,
                name: step.name.clone(),
                command: step.command.display(),
            });

            self.sink.trace(&step.command);

            match self.runner.run(&step, &self.sink).await {
                Ok(outcome) => {
                    pipeline.state.finish_step();
                    self.emit_event(ExecutionEvent::StepCompleted {
                        index,
                        name: step.name.clone(),
                        duration: outcome.duration,
                    });
                }
                Err(err) => {
                    debug!(step = %step.name, kind = err.kind(), "{}", err);
                    pipeline.state.fail(index);
                    self.emit_event(ExecutionEvent::StepFailed {
                        index,
                        name: step.name.clone(),
                        error: err.to_string(),
                    });
                    self.emit_event(ExecutionEvent::PipelineCompleted {
                        execution_id,
                        status: pipeline.state.status,
                        elapsed: pipeline.state.elapsed(),
                    });
                    return Err(err);
                }
            }
        }

        pipeline.state.complete();
        self.sink.confirm();

        info!("Pipeline execution finished: {}", pipeline.name);
        self.emit_event(ExecutionEvent::PipelineCompleted {
            execution_id,
            status: pipeline.state.status,
            elapsed: pipeline.state.elapsed(),
        });

        Ok(())
    }
}
