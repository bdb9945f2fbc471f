//! CLI output formatting

use crate::{
    core::{CommandSpec, ExecutionStatus, Pipeline},
    execution::ExecutionEvent,
};
use console::Emoji;
use std::time::Duration;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static SPINNER: Emoji<'_, '_> = Emoji("⏳ ", "~ ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", "> ");

/// Printed once after every check has passed
pub const SUCCESS_MESSAGE: &str = "All checks passed!";

/// Trace line for a command, in `set -x` form
pub fn format_trace_line(command: &CommandSpec) -> String {
    format!("+ {}", command.display())
}

/// The final confirmation; `decorated` adds the emoji and color
pub fn format_confirmation(decorated: bool) -> String {
    if decorated {
        format!("{}{}", CHECK, style(SUCCESS_MESSAGE).green())
    } else {
        SUCCESS_MESSAGE.to_string()
    }
}

/// Format an execution status for display
pub fn format_status(status: ExecutionStatus) -> String {
    match status {
        ExecutionStatus::Pending => style("PENDING").dim().to_string(),
        ExecutionStatus::Running => style("RUNNING").yellow().to_string(),
        ExecutionStatus::Completed => style("COMPLETED").green().to_string(),
        ExecutionStatus::Failed { step_index } => {
            style(format!("FAILED at step {}", step_index + 1)).red().to_string()
        }
    }
}

/// Format an execution event for the log
pub fn format_execution_event(event: &ExecutionEvent) -> String {
    match event {
        ExecutionEvent::PipelineStarted {
            execution_id,
            pipeline_name,
            total_steps,
        } => format!(
            "{}Starting {} ({} steps, {})",
            ROCKET,
            pipeline_name,
            total_steps,
            &execution_id.to_string()[..8]
        ),
        ExecutionEvent::StepStarted { index, name, command } => {
            format!("{}[{}] {}: {}", SPINNER, index + 1, name, command)
        }
        ExecutionEvent::StepCompleted { index, name, duration } => format!(
            "{}[{}] {} passed in {}",
            CHECK,
            index + 1,
            name,
            format_duration(*duration)
        ),
        ExecutionEvent::StepFailed { index, name, error } => {
            format!("{}[{}] {}: {}", CROSS, index + 1, name, error)
        }
        ExecutionEvent::PipelineCompleted {
            execution_id,
            status,
            elapsed,
        } => format!(
            "Pipeline ({}) {} after {}",
            &execution_id.to_string()[..8],
            format_status(*status),
            format_duration(*elapsed)
        ),
    }
}

/// One line per step: position, name, command line
pub fn format_step_list(pipeline: &Pipeline) -> String {
    let width = pipeline.steps().iter().map(|s| s.name.len()).max().unwrap_or(0);
    pipeline
        .steps()
        .iter()
        .enumerate()
        .map(|(i, step)| {
            format!(
                "{:>2}. {:<width$}  {}",
                i + 1,
                style(&step.name).bold(),
                style(step.command.display()).dim(),
                width = width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs == 0 {
        format!("{}ms", duration.as_millis())
    } else if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
