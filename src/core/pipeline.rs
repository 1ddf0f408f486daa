//! Pipeline domain model

use crate::core::task::Task;

/// Policy applied when a task fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureMode {
    /// Halt the pipeline at the first failing task
    #[default]
    FailFast,

    /// Run every task; the aggregate result is still the first failure
    ContinueOnFailure,
}

/// An ordered sequence of tasks executed as a unit
///
/// Execution order equals insertion order. A pipeline is built fresh per
/// invocation and has no lifecycle beyond a single run.
#[derive(Debug)]
pub struct Pipeline {
    /// Pipeline name (usually the job name)
    name: String,

    /// Tasks in insertion order
    tasks: Vec<Task>,

    /// Failure policy for this run
    failure_mode: FailureMode,
}

impl Pipeline {
    /// Create an empty pipeline with the default fail-fast policy
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: Vec::new(),
            failure_mode: FailureMode::default(),
        }
    }

    /// Set the failure policy
    pub fn with_failure_mode(mut self, mode: FailureMode) -> Self {
        self.failure_mode = mode;
        self
    }

    /// Append one task
    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Append multiple tasks, preserving their relative order
    pub fn add_task_list(&mut self, tasks: Vec<Task>) {
        self.tasks.extend(tasks);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn failure_mode(&self) -> FailureMode {
        self.failure_mode
    }

    /// Tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
