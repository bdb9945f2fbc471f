//! CLI command definitions

use clap::Args;

/// Run every check in order, stopping at the first failure
#[derive(Debug, Args, Clone, Default)]
pub struct RunCommand {}

/// Show the checks without running them
#[derive(Debug, Args, Clone, Default)]
pub struct ListCommand {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}
