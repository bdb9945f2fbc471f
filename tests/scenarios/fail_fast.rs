//! Test: Fail-fast - the first failing step ends the run

use crate::helpers::*;

#[tokio::test]
async fn test_failure_stops_later_steps() {
    let runner = MockRunner::new().with_exit("C", MockExit::Code(1));

    let result = run_with_mock(pipeline_of(&["A", "B", "C", "D"]), runner).await;

    assert_pipeline_failed_at(&result, "C");
    assert_invoked(&result, &["A", "B", "C"]);
    assert_eq!(result.traced_steps(), vec!["A", "B", "C"]);
    assert!(!result.output.contains("D output"));
}

#[tokio::test]
async fn test_first_failure_prefix_for_every_position() {
    let names = ["s1", "s2", "s3", "s4", "s5", "s6"];

    for len in 1..=names.len() {
        for fail_at in 1..=len {
            let steps = &names[..len];
            let failing = steps[fail_at - 1];
            let runner = MockRunner::new().with_exit(failing, MockExit::Code(2));

            let result = run_with_mock(pipeline_of(steps), runner).await;

            assert_pipeline_failed_at(&result, failing);
            assert_invoked(&result, &steps[..fail_at]);
            assert_eq!(result.pipeline.state.completed_steps, fail_at - 1);
        }
    }
}

#[tokio::test]
async fn test_missing_tool_aborts_like_a_failure() {
    let runner = MockRunner::new().with_exit("B", MockExit::Missing);

    let result = run_with_mock(pipeline_of(&["A", "B", "C"]), runner).await;

    assert_pipeline_failed_at(&result, "B");
    assert_invoked(&result, &["A", "B"]);
    assert_eq!(result.exit_code(), 127);
}

#[tokio::test]
async fn test_only_first_failure_is_reported() {
    let runner = MockRunner::new()
        .with_exit("A", MockExit::Code(3))
        .with_exit("B", MockExit::Code(4));

    let result = run_with_mock(pipeline_of(&["A", "B"]), runner).await;

    assert_pipeline_failed_at(&result, "A");
    assert_invoked(&result, &["A"]);
    assert_eq!(result.exit_code(), 3);
}

#[tokio::test]
async fn test_failing_run_is_repeatable() {
    for _ in 0..2 {
        let runner = MockRunner::new().with_exit("fmt", MockExit::Code(1));
        let result = run_with_mock(pipeline_of(&["check", "fmt", "clippy"]), runner).await;
        assert_pipeline_failed_at(&result, "fmt");
        assert_invoked(&result, &["check", "fmt"]);
    }
}
