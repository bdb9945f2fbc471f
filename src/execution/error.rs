//! Step failure types

use std::io;
use thiserror::Error;

/// Why a step stopped the pipeline
///
/// Both variants abort the run the same way; the distinction only shows up
/// in log output and in the exit status chosen for the process.
#[derive(Debug, Error)]
pub enum StepError {
    /// The program could not be started (missing, not executable, ...)
    #[error("step '{step}' could not be started: {source}")]
    Launch {
        step: String,
        #[source]
        source: io::Error,
    },

    /// The program ran and reported failure
    #[error("step '{step}' failed with {}", describe_exit(.exit_code))]
    Failed {
        step: String,
        exit_code: Option<i32>,
    },
}

impl StepError {
    /// Name of the step that failed
    pub fn step(&self) -> &str {
        match self {
            StepError::Launch { step, .. } | StepError::Failed { step, .. } => step,
        }
    }

    /// Short tag for logs
    pub fn kind(&self) -> &'static str {
        match self {
            StepError::Launch { .. } => "launch",
            StepError::Failed { .. } => "failed",
        }
    }

    /// Process exit status to report for this failure
    ///
    /// Propagates the child's code when it exited with one. Launch failures
    /// follow the shell convention (127 not found, 126 not executable).
    pub fn exit_code(&self) -> i32 {
        match self {
            StepError::Failed { exit_code: Some(code), .. } if *code != 0 => *code,
            StepError::Failed { .. } => 1,
            StepError::Launch { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => 127,
                io::ErrorKind::PermissionDenied => 126,
                _ => 1,
            },
        }
    }
}

fn describe_exit(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}
