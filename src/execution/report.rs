//! Run report models

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Final status of a single task within a run
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum TaskStatus {
    /// Task ran and reported success
    Succeeded { output: String },
    /// Task ran and reported failure
    Failed { error: String },
    /// Task never ran because an earlier task failed
    Skipped,
}

/// Record of one task within a run
#[derive(Debug, Clone, Serialize)]
pub struct TaskReport {
    pub label: String,

    #[serde(flatten)]
    pub status: TaskStatus,

    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
}

/// Aggregate outcome of a pipeline run
///
/// A run either succeeds as a whole or carries the first failure
/// encountered. There is no partial-success concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum RunOutcome {
    Success,
    Failed {
        index: usize,
        label: String,
        error: String,
    },
}

/// Outcome of a single pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Unique run ID
    pub run_id: Uuid,

    /// Name of the pipeline that ran
    pub pipeline_name: String,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// When the run finished
    pub finished_at: Option<DateTime<Utc>>,

    /// Per-task records, in execution order
    pub tasks: Vec<TaskReport>,

    /// Aggregate result
    pub outcome: RunOutcome,
}

impl RunReport {
    /// Start a report for a new run
    pub fn start(pipeline_name: impl Into<String>) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            pipeline_name: pipeline_name.into(),
            started_at: Utc::now(),
            finished_at: None,
            tasks: Vec::new(),
            outcome: RunOutcome::Success,
        }
    }

    /// Record a successful task
    pub fn record_success(
        &mut self,
        label: impl Into<String>,
        output: String,
        started_at: DateTime<Utc>,
    ) {
        self.tasks.push(TaskReport {
            label: label.into(),
            status: TaskStatus::Succeeded { output },
            started_at: Some(started_at),
            finished_at: Some(Utc::now()),
        });
    }

    /// Record a failed task
    ///
    /// Only the first failure becomes the run outcome; later failures
    /// (continue-on-failure mode) are still recorded per task.
    pub fn record_failure(
        &mut self,
        label: impl Into<String>,
        error: String,
        started_at: DateTime<Utc>,
    ) {
        let label = label.into();
        let index = self.tasks.len();

        self.tasks.push(TaskReport {
            label: label.clone(),
            status: TaskStatus::Failed {
                error: error.clone(),
            },
            started_at: Some(started_at),
            finished_at: Some(Utc::now()),
        });

        if matches!(self.outcome, RunOutcome::Success) {
            self.outcome = RunOutcome::Failed {
                index,
                label,
                error,
            };
        }
    }

    /// Record a task skipped because an earlier task failed
    pub fn record_skipped(&mut self, label: impl Into<String>) {
        self.tasks.push(TaskReport {
            label: label.into(),
            status: TaskStatus::Skipped,
            started_at: None,
            finished_at: None,
        });
    }

    /// Mark the run as finished
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Whether every task succeeded
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, RunOutcome::Success)
    }

    /// The first failure, if any
    pub fn first_failure(&self) -> Option<(usize, &str, &str)> {
        match &self.outcome {
            RunOutcome::Success => None,
            RunOutcome::Failed {
                index,
                label,
                error,
            } => Some((*index, label.as_str(), error.as_str())),
        }
    }

    /// Number of tasks that actually ran (succeeded or failed)
    pub fn executed_count(&self) -> usize {
        self.tasks
            .iter()
            .filter(|t| !matches!(t.status, TaskStatus::Skipped))
            .count()
    }

    /// Conventional process exit code: 0 for success, 1 for failure
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    /// Total wall-clock duration, if the run has finished
    pub fn duration(&self) -> Option<chrono::Duration> {
        self.finished_at.map(|end| end - self.started_at)
    }
}
