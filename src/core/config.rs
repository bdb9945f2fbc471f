//! Pipeline configuration from YAML
//!
//! The check list ships inside the binary (`checks.yaml`), so every run of
//! the tool executes the same gates in the same order.

use crate::core::Pipeline;
use serde::{Deserialize, Serialize};
use anyhow::{Context, Result};

/// The embedded check definition
const BUILTIN_CHECKS: &str = include_str!("checks.yaml");

/// Top-level pipeline configuration loaded from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Pipeline name
    pub name: String,

    /// Check steps, in execution order
    pub steps: Vec<StepConfig>,
}

/// Step configuration as defined in YAML
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StepConfig {
    /// Human-readable step label
    pub name: String,

    /// Executable to launch
    pub program: String,

    /// Arguments passed verbatim, in order
    #[serde(default)]
    pub args: Vec<String>,
}

impl PipelineConfig {
    /// Load the check list compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(BUILTIN_CHECKS).context("Embedded check definition is invalid")
    }

    /// Parse pipeline configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: PipelineConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the pipeline configuration
    pub fn validate(&self) -> Result<()> {
        if self.steps.is_empty() {
            anyhow::bail!("Pipeline '{}' defines no steps", self.name);
        }

        let mut seen_names = std::collections::HashSet::new();
        for step in &self.steps {
            if !seen_names.insert(&step.name) {
                anyhow::bail!("Duplicate step name: {}", step.name);
            }
            if step.program.trim().is_empty() {
                anyhow::bail!("Step '{}' has an empty program", step.name);
            }
        }

        Ok(())
    }

    /// Convert to a runtime pipeline
    pub fn to_pipeline(&self) -> Pipeline {
        Pipeline::from_config(self)
    }
}
