//! Pipeline runner - executes tasks in insertion order with fail-fast semantics

use crate::core::{FailureMode, JobContext, Pipeline};
use crate::execution::report::RunReport;
use chrono::Utc;
use tracing::{error, info};
use uuid::Uuid;

/// Events emitted during a pipeline run
#[derive(Debug, Clone)]
pub enum RunEvent {
    PipelineStarted {
        run_id: Uuid,
        pipeline_name: String,
        total_tasks: usize,
    },
    TaskStarted {
        index: usize,
        label: String,
    },
    TaskCompleted {
        index: usize,
        label: String,
    },
    TaskFailed {
        index: usize,
        label: String,
        error: String,
    },
    TaskSkipped {
        index: usize,
        label: String,
    },
    PipelineFinished {
        run_id: Uuid,
        success: bool,
    },
}

/// Type for event handlers
pub type EventHandler = Box<dyn Fn(&RunEvent) + Send + Sync>;

/// Executes a pipeline one task at a time
///
/// Exactly one task runs at a time, to completion, before the next
/// begins. The runner has no side effects of its own beyond invocation
/// and outcome inspection.
#[derive(Default)]
pub struct PipelineRunner {
    event_handlers: Vec<EventHandler>,
}

impl PipelineRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an event handler
    pub fn add_event_handler<F>(&mut self, handler: F)
    where
        F: Fn(&RunEvent) + Send + Sync + 'static,
    {
        self.event_handlers.push(Box::new(handler));
    }

    /// Emit an event to all handlers
    fn emit(&self, event: &RunEvent) {
        for handler in &self.event_handlers {
            handler(event);
        }
    }

    /// Run the pipeline to completion and return the aggregate report
    pub async fn run(&self, pipeline: &Pipeline, ctx: &JobContext) -> RunReport {
        let mut report = RunReport::start(pipeline.name());

        info!(
            "Starting pipeline: {} ({} tasks, {})",
            pipeline.name(),
            pipeline.len(),
            report.run_id
        );
        self.emit(&RunEvent::PipelineStarted {
            run_id: report.run_id,
            pipeline_name: pipeline.name().to_string(),
            total_tasks: pipeline.len(),
        });

        let mut halted = false;

        for (index, task) in pipeline.tasks().iter().enumerate() {
            let label = task.label().to_string();

            if halted {
                report.record_skipped(&label);
                self.emit(&RunEvent::TaskSkipped { index, label });
                continue;
            }

            info!("Running task: {}", label);
            self.emit(&RunEvent::TaskStarted {
                index,
                label: label.clone(),
            });

            let started_at = Utc::now();
            match task.execute(ctx).await {
                Ok(output) => {
                    info!("Task completed: {}", label);
                    report.record_success(&label, output.detail, started_at);
                    self.emit(&RunEvent::TaskCompleted { index, label });
                }
                Err(e) => {
                    let error = e.to_string();
                    error!("Task failed: {}: {}", label, error);
                    report.record_failure(&label, error.clone(), started_at);
                    self.emit(&RunEvent::TaskFailed {
                        index,
                        label,
                        error,
                    });

                    if pipeline.failure_mode() == FailureMode::FailFast {
                        halted = true;
                    }
                }
            }
        }

        report.finish();

        info!(
            "Pipeline finished: {} - {}",
            pipeline.name(),
            if report.is_success() { "success" } else { "failed" }
        );
        self.emit(&RunEvent::PipelineFinished {
            run_id: report.run_id,
            success: report.is_success(),
        });

        report
    }
}
