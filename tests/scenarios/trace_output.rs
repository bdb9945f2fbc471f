//! Test: Trace output - each command is echoed before it runs

use crate::helpers::*;

#[tokio::test]
async fn test_trace_precedes_step_output() {
    let result = run_with_mock(pipeline_of(&["A", "B"]), MockRunner::new()).await;

    let lines: Vec<_> = result.output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "+ A --check",
            "A output",
            "+ B --check",
            "B output",
            "All checks passed!",
        ]
    );
}

#[tokio::test]
async fn test_failed_step_is_traced() {
    let runner = MockRunner::new().with_exit("B", MockExit::Code(1));

    let result = run_with_mock(pipeline_of(&["A", "B", "C"]), runner).await;

    let lines: Vec<_> = result.output.lines().collect();
    assert_eq!(lines.last(), Some(&"B output"));
    assert!(lines.contains(&"+ B --check"));
    assert!(!lines.contains(&"+ C --check"));
}

#[tokio::test]
async fn test_missing_tool_is_traced_without_output() {
    let runner = MockRunner::new().with_exit("A", MockExit::Missing);

    let result = run_with_mock(pipeline_of(&["A"]), runner).await;

    assert_eq!(result.output, "+ A --check\n");
}
