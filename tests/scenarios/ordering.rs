//! Test: Ordering - add_task_list matches sequential add_task calls

use crate::helpers::*;
use tasklane::core::Pipeline;

/// add_task_list([A, B, C]) executes in the same order as three add_task calls
#[tokio::test]
async fn test_add_task_list_matches_sequential_adds() {
    let list_log = new_log();
    let mut via_list = Pipeline::new("via-list");
    via_list.add_task_list(vec![
        succeeding_task("a", &list_log),
        succeeding_task("b", &list_log),
        succeeding_task("c", &list_log),
    ]);

    let adds_log = new_log();
    let mut via_adds = Pipeline::new("via-adds");
    via_adds.add_task(succeeding_task("a", &adds_log));
    via_adds.add_task(succeeding_task("b", &adds_log));
    via_adds.add_task(succeeding_task("c", &adds_log));

    let list_report = run_pipeline(&via_list).await;
    let adds_report = run_pipeline(&via_adds).await;

    assert_run_succeeded(&list_report);
    assert_run_succeeded(&adds_report);
    assert_eq!(logged(&list_log), logged(&adds_log));
    assert_eq!(logged(&list_log), vec!["a", "b", "c"]);
}

/// Mixing add_task and add_task_list preserves overall insertion order
#[tokio::test]
async fn test_mixed_adds_preserve_insertion_order() {
    let log = new_log();
    let mut pipeline = Pipeline::new("mixed");
    pipeline.add_task(succeeding_task("first", &log));
    pipeline.add_task_list(vec![
        succeeding_task("second", &log),
        succeeding_task("third", &log),
    ]);
    pipeline.add_task(succeeding_task("fourth", &log));

    run_pipeline(&pipeline).await;

    assert_eq!(logged(&log), vec!["first", "second", "third", "fourth"]);
}
