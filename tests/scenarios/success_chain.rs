//! Test: Success Chain - every task runs once, in insertion order

use crate::helpers::*;
use tasklane::core::Pipeline;

/// Two succeeding tasks run in order and the run succeeds
#[tokio::test]
async fn test_two_task_success() {
    let log = new_log();
    let mut pipeline = Pipeline::new("two");
    pipeline.add_task(succeeding_task("first", &log));
    pipeline.add_task(succeeding_task("second", &log));

    let report = run_pipeline(&pipeline).await;

    assert_run_succeeded(&report);
    assert_eq!(report.executed_count(), 2);
    assert_eq!(logged(&log), vec!["first", "second"]);
}

/// A longer chain still executes every task exactly once, in order
#[tokio::test]
async fn test_long_chain_runs_each_task_once() {
    let log = new_log();
    let labels = ["install", "provision", "migrate", "test", "teardown"];

    let mut pipeline = Pipeline::new("chain");
    for label in labels {
        pipeline.add_task(succeeding_task(label, &log));
    }

    let report = run_pipeline(&pipeline).await;

    assert_run_succeeded(&report);
    assert_eq!(report.executed_count(), labels.len());
    assert_eq!(logged(&log), labels);
}

/// Captured output from each task is preserved in the report
#[tokio::test]
async fn test_task_output_captured() {
    let log = new_log();
    let mut pipeline = Pipeline::new("outputs");
    pipeline.add_task(succeeding_task("install", &log));
    pipeline.add_task(succeeding_task("test", &log));

    let report = run_pipeline(&pipeline).await;

    assert_task_output(&report, "install", "install ok");
    assert_task_output(&report, "test", "test ok");
}
