//! tasklane - a fail-fast task pipeline runner for CI jobs

pub mod cli;
pub mod core;
pub mod execution;
pub mod jobs;
pub mod shell;

// Re-export commonly used types
pub use crate::core::{
    FailureMode, JobContext, Pipeline, Task, TaskAction, TaskError, TaskOutput,
};
pub use crate::execution::{
    PipelineRunner, RunEvent, RunOutcome, RunReport, TaskReport, TaskStatus,
};
pub use crate::shell::ShellCommand;
