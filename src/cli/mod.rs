//! Command-line interface

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use commands::{ListCommand, RunCommand};
use std::ffi::OsString;

/// Local verification pipeline
#[derive(Debug, Parser, Clone)]
#[command(name = "check")]
#[command(version)]
#[command(about = "Runs the project's quality gates in order, stopping at the first failure")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run the checks (the default)
    Run(RunCommand),

    /// List the checks
    List(ListCommand),
}

impl Default for Command {
    fn default() -> Self {
        Command::Run(RunCommand::default())
    }
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }

    /// The command to execute, `run` when none was given
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or_default()
    }
}
