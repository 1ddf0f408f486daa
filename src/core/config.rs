//! Jobs file configuration from YAML

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;

/// Top-level jobs file loaded from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobsConfig {
    /// Variables available to all jobs
    #[serde(default)]
    pub variables: HashMap<String, String>,

    /// Named jobs, each an ordered list of tasks
    pub jobs: Vec<JobConfig>,
}

/// A single named job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    /// Unique job name (the CLI entry point)
    pub name: String,

    /// Optional human-readable description
    #[serde(default)]
    pub description: Option<String>,

    /// Halt at the first failing task
    #[serde(default = "default_fail_fast")]
    pub fail_fast: bool,

    /// Tasks in execution order
    #[serde(default)]
    pub tasks: Vec<TaskConfig>,
}

/// Task configuration as defined in YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskConfig {
    /// Label used in reports and logs
    pub label: String,

    /// Shell command line, rendered with `{{ variable }}` substitution
    pub run: String,

    /// Working directory for the command (relative to the invocation dir)
    #[serde(default)]
    pub dir: Option<String>,

    /// Extra environment entries for the command
    #[serde(default)]
    pub env: HashMap<String, String>,
}

fn default_fail_fast() -> bool {
    true
}

impl JobsConfig {
    /// Load a jobs file from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a jobs file from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: JobsConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the jobs file
    pub fn validate(&self) -> Result<()> {
        let mut seen_jobs = std::collections::HashSet::new();
        for job in &self.jobs {
            if job.name.trim().is_empty() {
                anyhow::bail!("Job with empty name");
            }
            if !seen_jobs.insert(&job.name) {
                anyhow::bail!("Duplicate job name: {}", job.name);
            }

            let mut seen_labels = std::collections::HashSet::new();
            for task in &job.tasks {
                if task.label.trim().is_empty() {
                    anyhow::bail!("Job '{}' has a task with an empty label", job.name);
                }
                if !seen_labels.insert(&task.label) {
                    anyhow::bail!(
                        "Job '{}' has duplicate task label: {}",
                        job.name,
                        task.label
                    );
                }
                if task.run.trim().is_empty() {
                    anyhow::bail!(
                        "Task '{}' in job '{}' has an empty command",
                        task.label,
                        job.name
                    );
                }
            }
        }

        Ok(())
    }

    /// Look up a job by name
    pub fn job(&self, name: &str) -> Option<&JobConfig> {
        self.jobs.iter().find(|j| j.name == name)
    }
}
