//! Shell task action - runs a command line through `sh -c`

use crate::core::context::JobContext;
use crate::core::task::{TaskAction, TaskError, TaskOutput};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::process::Command;
use tracing::{debug, warn};

/// A task action that spawns an external command and captures its output
#[derive(Debug, Clone)]
pub struct ShellCommand {
    /// Command line passed to `sh -c`
    line: String,

    /// Working directory for the command
    dir: Option<PathBuf>,

    /// Extra environment entries
    env: HashMap<String, String>,
}

impl ShellCommand {
    /// Create a shell command action
    pub fn new(line: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            dir: None,
            env: HashMap::new(),
        }
    }

    /// Set the working directory
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    /// Add an environment entry
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// The command line this action will run
    pub fn line(&self) -> &str {
        &self.line
    }
}

#[async_trait]
impl TaskAction for ShellCommand {
    async fn run(&self, _ctx: &JobContext) -> Result<TaskOutput, TaskError> {
        debug!("Spawning shell command: {}", self.line);

        let mut command = Command::new("sh");
        command.arg("-c").arg(&self.line).kill_on_drop(true);

        if let Some(dir) = &self.dir {
            command.current_dir(dir);
        }
        for (key, value) in &self.env {
            command.env(key, value);
        }

        let output = command
            .output()
            .await
            .map_err(|e| TaskError::Spawn(format!("{}: {}", self.line, e)))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            let exit_code = output.status.code().unwrap_or(-1);
            warn!("Command exited with code {}: {}", exit_code, self.line);

            let detail = if stderr.trim().is_empty() {
                stdout.trim().to_string()
            } else {
                stderr.trim().to_string()
            };
            return Err(TaskError::ExitStatus {
                code: exit_code,
                detail,
            });
        }

        debug!("Command produced {} bytes of output", stdout.len());

        Ok(TaskOutput::new(stdout.trim().to_string()))
    }
}
