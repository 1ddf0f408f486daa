//! Test: Deferred Construction - builders run only when a task's turn arrives

use crate::helpers::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tasklane::core::{JobContext, Pipeline, Task, TaskAction, TaskError, TaskOutput};

struct NoopAction;

#[async_trait::async_trait]
impl TaskAction for NoopAction {
    async fn run(&self, _ctx: &JobContext) -> Result<TaskOutput, TaskError> {
        Ok(TaskOutput::empty())
    }
}

fn counting_deferred(label: &str, built: &Arc<AtomicUsize>) -> Task {
    let built = built.clone();
    Task::deferred(label, move |_ctx| {
        built.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(NoopAction) as Box<dyn TaskAction>)
    })
}

/// A failure at task i means task i+1 is never even constructed
#[tokio::test]
async fn test_failure_prevents_later_construction() {
    let log = new_log();
    let built = Arc::new(AtomicUsize::new(0));

    let mut pipeline = Pipeline::new("no-waste");
    pipeline.add_task(failing_task("provision", "compose up failed", &log));
    pipeline.add_task(counting_deferred("expensive setup", &built));

    let report = run_pipeline(&pipeline).await;

    assert_run_failed_at(&report, 0, "provision", "compose up failed");
    assert_eq!(
        built.load(Ordering::SeqCst),
        0,
        "Later task should never have been constructed"
    );
}

/// A builder failure counts as that task's failure and halts the pipeline
#[tokio::test]
async fn test_builder_failure_is_task_failure() {
    let log = new_log();
    let built = Arc::new(AtomicUsize::new(0));

    let mut pipeline = Pipeline::new("builder-fails");
    pipeline.add_task(succeeding_task("install", &log));
    pipeline.add_task(Task::deferred("resolve args", |_ctx| {
        Err(TaskError::Setup("missing database url".to_string()))
    }));
    pipeline.add_task(counting_deferred("later", &built));

    let report = run_pipeline(&pipeline).await;

    assert_run_failed_at(&report, 1, "resolve args", "missing database url");
    assert_eq!(logged(&log), vec!["install"]);
    assert_eq!(built.load(Ordering::SeqCst), 0);
    assert_task_skipped(&report, "later");
}

/// Builders for all tasks run when every task succeeds
#[tokio::test]
async fn test_all_builders_run_on_success() {
    let built = Arc::new(AtomicUsize::new(0));

    let mut pipeline = Pipeline::new("all-built");
    pipeline.add_task(counting_deferred("a", &built));
    pipeline.add_task(counting_deferred("b", &built));
    pipeline.add_task(counting_deferred("c", &built));

    let report = run_pipeline(&pipeline).await;

    assert_run_succeeded(&report);
    assert_eq!(built.load(Ordering::SeqCst), 3);
}
