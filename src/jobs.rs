//! Job assembly - turns job configuration into runnable pipelines

use crate::core::config::{JobConfig, TaskConfig};
use crate::core::{FailureMode, Pipeline, Task, TaskAction, TaskError};
use crate::shell::ShellCommand;

/// Build a pipeline for a named job
///
/// Each task is deferred: its shell command is rendered and constructed
/// only when its turn to execute arrives, so a failure earlier in the
/// pipeline never triggers construction of later tasks.
pub fn assemble(job: &JobConfig) -> Pipeline {
    let mode = if job.fail_fast {
        FailureMode::FailFast
    } else {
        FailureMode::ContinueOnFailure
    };

    let mut pipeline = Pipeline::new(&job.name).with_failure_mode(mode);
    pipeline.add_task_list(job.tasks.iter().map(task_from_config).collect());
    pipeline
}

fn task_from_config(config: &TaskConfig) -> Task {
    let config = config.clone();
    let label = config.label.clone();

    Task::deferred(label, move |ctx| {
        let line = ctx.render(&config.run);
        if line.trim().is_empty() {
            return Err(TaskError::Setup(format!(
                "task '{}' rendered to an empty command",
                config.label
            )));
        }

        let mut command = ShellCommand::new(line);
        if let Some(dir) = &config.dir {
            command = command.current_dir(ctx.render(dir));
        }
        for (key, value) in &config.env {
            command = command.env(key, ctx.render(value));
        }

        Ok(Box::new(command) as Box<dyn TaskAction>)
    })
}
