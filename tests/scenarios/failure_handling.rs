//! Test: Failure Handling - fail-fast semantics and diagnostics

use crate::helpers::*;
use tasklane::core::Pipeline;

/// [ok, ok, fail("X"), ok] fails with "X" after exactly 3 executions
#[tokio::test]
async fn test_failure_halts_pipeline() {
    let log = new_log();
    let mut pipeline = Pipeline::new("halts");
    pipeline.add_task(succeeding_task("a", &log));
    pipeline.add_task(succeeding_task("b", &log));
    pipeline.add_task(failing_task("c", "X", &log));
    pipeline.add_task(succeeding_task("d", &log));

    let report = run_pipeline(&pipeline).await;

    assert_run_failed_at(&report, 2, "c", "X");
    assert_eq!(report.executed_count(), 3);
    assert_eq!(logged(&log), vec!["a", "b", "c"]);
    assert_task_skipped(&report, "d");
    assert_eq!(report.exit_code(), 1);
}

/// A failure in the very first task skips everything else
#[tokio::test]
async fn test_first_task_failure() {
    let log = new_log();
    let mut pipeline = Pipeline::new("first-fails");
    pipeline.add_task(failing_task("setup", "database unreachable", &log));
    pipeline.add_task(succeeding_task("test", &log));
    pipeline.add_task(succeeding_task("teardown", &log));

    let report = run_pipeline(&pipeline).await;

    assert_run_failed_at(&report, 0, "setup", "database unreachable");
    assert_eq!(report.executed_count(), 1);
    assert_eq!(logged(&log), vec!["setup"]);
    assert_task_skipped(&report, "test");
    assert_task_skipped(&report, "teardown");
}

/// The failing task's diagnostic is the run's diagnostic, unchanged
#[tokio::test]
async fn test_diagnostic_propagates() {
    let log = new_log();
    let mut pipeline = Pipeline::new("diagnostics");
    pipeline.add_task(failing_task(
        "style check",
        "phpcs found 12 violations",
        &log,
    ));

    let report = run_pipeline(&pipeline).await;

    let (_, _, error) = report.first_failure().unwrap();
    assert_eq!(error, "phpcs found 12 violations");
}
