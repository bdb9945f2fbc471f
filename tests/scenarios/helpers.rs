//! Test utility functions for ewebsock-check

use async_trait::async_trait;
use ewebsock_check::core::{CheckStep, ExecutionStatus, Pipeline};
use ewebsock_check::execution::{
    ExecutionEngine, OutputSink, StepError, StepOutcome, StepRunner,
};
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// How a mocked step ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockExit {
    /// The tool ran and exited with this code
    Code(i32),
    /// The tool does not exist
    Missing,
}

/// Runner that never spawns anything
///
/// Every step passes unless scripted otherwise. Each invocation is
/// recorded, and a `<name> output` marker is written to a capturing sink
/// the way a real tool would write to its stdout.
pub struct MockRunner {
    exits: HashMap<String, MockExit>,
    invocations: Arc<Mutex<Vec<String>>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self {
            exits: HashMap::new(),
            invocations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_exit(mut self, step: &str, exit: MockExit) -> Self {
        self.exits.insert(step.to_string(), exit);
        self
    }

    /// Handle to the invocation log, usable after the runner moved into an engine
    pub fn invocations(&self) -> Arc<Mutex<Vec<String>>> {
        self.invocations.clone()
    }
}

#[async_trait]
impl StepRunner for MockRunner {
    async fn run(&self, step: &CheckStep, sink: &OutputSink) -> Result<StepOutcome, StepError> {
        self.invocations.lock().unwrap().push(step.name.clone());

        match self.exits.get(&step.name).copied().unwrap_or(MockExit::Code(0)) {
            MockExit::Missing => Err(StepError::Launch {
                step: step.name.clone(),
                source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
            }),
            MockExit::Code(code) => {
                if let OutputSink::Capture(buffer) = sink {
                    buffer.append(format!("{} output\n", step.name).as_bytes());
                }
                if code == 0 {
                    Ok(StepOutcome {
                        exit_code: Some(0),
                        duration: Duration::from_millis(1),
                    })
                } else {
                    Err(StepError::Failed {
                        step: step.name.clone(),
                        exit_code: Some(code),
                    })
                }
            }
        }
    }
}

/// Build a pipeline whose step `x` runs `x --check`
pub fn pipeline_of(names: &[&str]) -> Pipeline {
    Pipeline::new(
        "Test Pipeline",
        names
            .iter()
            .map(|name| CheckStep::new(*name, *name, ["--check"]))
            .collect(),
    )
}

/// Everything observable about one run
#[derive(Debug)]
pub struct RunResult {
    pub pipeline: Pipeline,
    pub result: Result<(), StepError>,
    pub output: String,
    pub invocations: Vec<String>,
}

impl RunResult {
    pub fn is_success(&self) -> bool {
        self.result.is_ok() && self.pipeline.state.status == ExecutionStatus::Completed
    }

    /// Process exit status the binary would report
    pub fn exit_code(&self) -> i32 {
        match &self.result {
            Ok(()) => 0,
            Err(err) => err.exit_code(),
        }
    }

    /// Names of steps whose trace line was printed
    pub fn traced_steps(&self) -> Vec<String> {
        self.output
            .lines()
            .filter_map(|line| line.strip_prefix("+ "))
            .filter_map(|cmd| cmd.split_whitespace().next())
            .map(str::to_string)
            .collect()
    }

    pub fn confirmations(&self) -> usize {
        self.output.matches("All checks passed!").count()
    }
}

/// Run a pipeline with a capturing sink
pub async fn run_with_mock(mut pipeline: Pipeline, runner: MockRunner) -> RunResult {
    let invocations = runner.invocations();
    let (sink, buffer) = OutputSink::capture();
    let engine = ExecutionEngine::new(runner, sink);

    let result = engine.execute(&mut pipeline).await;

    let invocations = invocations.lock().unwrap().clone();
    RunResult {
        pipeline,
        result,
        output: buffer.contents(),
        invocations,
    }
}

/// Assert the pipeline passed and announced it once
pub fn assert_pipeline_completed(result: &RunResult) {
    assert!(
        result.is_success(),
        "Pipeline should have completed, got {:?} / {:?}\n{}",
        result.pipeline.state.status,
        result.result,
        result.output
    );
    assert_eq!(result.exit_code(), 0);
    assert_eq!(result.confirmations(), 1, "output:\n{}", result.output);
}

/// Assert the pipeline aborted at `step`
pub fn assert_pipeline_failed_at(result: &RunResult, step: &str) {
    let err = result
        .result
        .as_ref()
        .err()
        .unwrap_or_else(|| panic!("Pipeline should have failed at '{}'", step));
    assert_eq!(err.step(), step);
    assert_ne!(result.exit_code(), 0);
    assert_eq!(result.confirmations(), 0, "output:\n{}", result.output);

    let index = result
        .pipeline
        .steps()
        .iter()
        .position(|s| s.name == step)
        .unwrap_or_else(|| panic!("Step '{}' not in pipeline", step));
    assert_eq!(
        result.pipeline.state.status,
        ExecutionStatus::Failed { step_index: index }
    );
}

/// Assert exactly these steps were started, in this order
pub fn assert_invoked(result: &RunResult, expected: &[&str]) {
    assert_eq!(
        result.invocations, expected,
        "Expected invocations: {:?}\nActual: {:?}",
        expected, result.invocations
    );
}
