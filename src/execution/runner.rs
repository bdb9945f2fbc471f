//! Step runner - launches a check's command and waits for it

use crate::{
    core::CheckStep,
    execution::{OutputSink, StepError},
};
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::process::Command;
use tracing::debug;

/// What a successful step reports back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    /// Exit code of the child, if it had one
    pub exit_code: Option<i32>,

    /// Wall-clock time the step took
    pub duration: Duration,
}

/// Trait for running a step - allows tests to substitute fakes
#[async_trait]
pub trait StepRunner: Send + Sync {
    /// Run a step to completion
    ///
    /// `Ok` means the step passed. Anything else, including a program that
    /// could not be started, is an `Err`.
    async fn run(
        &self,
        step: &CheckStep,
        sink: &OutputSink,
    ) -> Result<StepOutcome, StepError>;
}

/// Runs steps as child processes
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    /// Directory children start in; `None` keeps the current directory
    working_dir: Option<PathBuf>,
}

impl ProcessRunner {
    /// Run children in the current directory (the project root)
    pub fn new() -> Self {
        Self::default()
    }

    /// Run children in `dir`
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: Some(dir.into()),
        }
    }
}

#[async_trait]
impl StepRunner for ProcessRunner {
    async fn run(&self, step: &CheckStep, sink: &OutputSink) -> Result<StepOutcome, StepError> {
        let started = Instant::now();
        let (stdin, stdout, stderr) = sink.child_stdio();

        let mut command = Command::new(&step.command.program);
        command
            .args(&step.command.args)
            .stdin(stdin)
            .stdout(stdout)
            .stderr(stderr);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        debug!("Spawning {} for step {}", step.command.program, step.name);

        let launch_error = |source| StepError::Launch {
            step: step.name.clone(),
            source,
        };
        let mut child = command.spawn().map_err(launch_error)?;

        // No timeout: a hung tool hangs the pipeline
        let status = match sink {
            OutputSink::Inherit => child.wait().await.map_err(launch_error)?,
            OutputSink::Capture(_) => {
                let output = child.wait_with_output().await.map_err(launch_error)?;
                sink.collect(&output);
                output.status
            }
        };

        let exit_code = status.code();
        if !status.success() {
            return Err(StepError::Failed {
                step: step.name.clone(),
                exit_code,
            });
        }

        Ok(StepOutcome {
            exit_code,
            duration: started.elapsed(),
        })
    }
}
