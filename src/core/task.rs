//! Task domain model
//!
//! A task is an opaque unit of work: a label for reporting plus an action
//! that eventually reports success or failure. Actions can be built up
//! front or deferred, in which case the builder runs only when the task's
//! turn to execute arrives.

use crate::core::context::JobContext;
use async_trait::async_trait;
use thiserror::Error;

/// An executable action with a success/failure outcome
#[async_trait]
pub trait TaskAction: Send + Sync {
    /// Run the action to completion
    async fn run(&self, ctx: &JobContext) -> Result<TaskOutput, TaskError>;
}

/// Captured output from a successful task
#[derive(Debug, Clone, Default)]
pub struct TaskOutput {
    /// Diagnostic text produced by the action (e.g. captured stdout)
    pub detail: String,
}

impl TaskOutput {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

/// Errors a task can produce
#[derive(Debug, Error)]
pub enum TaskError {
    /// The underlying command could not be started
    #[error("failed to start command: {0}")]
    Spawn(String),

    /// The command ran but exited with a non-zero status
    #[error("command exited with code {code}: {detail}")]
    ExitStatus { code: i32, detail: String },

    /// Building the task's action failed before anything ran
    #[error("task setup failed: {0}")]
    Setup(String),

    /// Any other action failure
    #[error("{0}")]
    Action(String),
}

type ActionBuilder =
    Box<dyn Fn(&JobContext) -> Result<Box<dyn TaskAction>, TaskError> + Send + Sync>;

enum TaskBody {
    /// Action constructed up front
    Ready(Box<dyn TaskAction>),
    /// Action constructed at the moment of execution
    Deferred(ActionBuilder),
}

/// A single unit of work in a pipeline
pub struct Task {
    label: String,
    body: TaskBody,
}

impl Task {
    /// Create a task with a pre-built action
    pub fn new(label: impl Into<String>, action: impl TaskAction + 'static) -> Self {
        Self {
            label: label.into(),
            body: TaskBody::Ready(Box::new(action)),
        }
    }

    /// Create a task whose action is built only when the task executes
    ///
    /// A failure in the builder counts as this task's failure; later tasks
    /// in the pipeline are never constructed under fail-fast.
    pub fn deferred<F>(label: impl Into<String>, builder: F) -> Self
    where
        F: Fn(&JobContext) -> Result<Box<dyn TaskAction>, TaskError> + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            body: TaskBody::Deferred(Box::new(builder)),
        }
    }

    /// The task's label, used in reports and logs
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Execute the task to completion
    pub async fn execute(&self, ctx: &JobContext) -> Result<TaskOutput, TaskError> {
        match &self.body {
            TaskBody::Ready(action) => action.run(ctx).await,
            TaskBody::Deferred(builder) => builder(ctx)?.run(ctx).await,
        }
    }
}

impl std::fmt::Debug for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Task").field("label", &self.label).finish()
    }
}
