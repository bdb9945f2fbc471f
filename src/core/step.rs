//! Step domain model

use crate::core::config::StepConfig;
use serde::Serialize;
use std::fmt;

/// A single check in a pipeline
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CheckStep {
    /// Human-readable label
    pub name: String,

    /// The command this step launches
    pub command: CommandSpec,
}

/// Program plus its ordered argument list
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CheckStep {
    /// Create a step from a step config
    pub fn from_config(config: &StepConfig) -> Self {
        CheckStep {
            name: config.name.clone(),
            command: CommandSpec::new(&config.program, config.args.iter().cloned()),
        }
    }

    pub fn new<I, S>(name: impl Into<String>, program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CheckStep {
            name: name.into(),
            command: CommandSpec::new(program, args),
        }
    }
}

impl CommandSpec {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommandSpec {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Render as a shell command line, quoting words that need it
    pub fn display(&self) -> String {
        std::iter::once(&self.program)
            .chain(self.args.iter())
            .map(|word| shell_quote(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

fn shell_quote(word: &str) -> String {
    let plain = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:,+@%".contains(c));
    if plain {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}
