use anismoke::exec::{CommandSpec, run_command};

#[tokio::test]
async fn zero_exit_is_success() {
    let result = run_command(&CommandSpec::new(["true"])).await;
    assert!(result.success);
}

#[tokio::test]
async fn nonzero_exits_are_failures() {
    for code in [1, 2, 127] {
        let spec = CommandSpec::new(vec![
            "sh".to_string(),
            "-c".to_string(),
            format!("exit {code}"),
        ]);
        let result = run_command(&spec).await;
        assert!(!result.success, "exit {code} should be reported as failure");
    }
}

#[tokio::test]
async fn missing_executable_reports_failure_without_panicking() {
    let spec = CommandSpec::new(["definitely-not-installed-anywhere-7f3a"]);
    let result = run_command(&spec).await;
    assert!(!result.success);
    assert!(result.stdout.is_empty());
    assert!(result.stderr.is_empty());
}

#[tokio::test]
async fn empty_command_reports_failure() {
    let result = run_command(&CommandSpec::new(Vec::<String>::new())).await;
    assert!(!result.success);
}

#[tokio::test]
async fn delayed_lines_are_captured_once_in_order() {
    // The child writes slower than any internal polling, so this catches
    // duplicated or dropped lines around stream EOF.
    let spec = CommandSpec::new([
        "sh",
        "-c",
        "for i in 1 2 3 4 5; do echo line$i; sleep 0.05; done",
    ]);
    let result = run_command(&spec).await;
    assert!(result.success);
    assert_eq!(result.stdout, ["line1", "line2", "line3", "line4", "line5"]);
    assert!(result.stderr.is_empty());
}

#[tokio::test]
async fn stdout_and_stderr_are_captured_per_stream() {
    let spec = CommandSpec::new(["sh", "-c", "echo out; echo err >&2; exit 3"]);
    let result = run_command(&spec).await;
    assert!(!result.success);
    assert_eq!(result.stdout, ["out"]);
    assert_eq!(result.stderr, ["err"]);
}

#[tokio::test]
async fn output_is_fully_drained_after_fast_exit() {
    // A burst right before exit must still be drained after termination.
    let spec = CommandSpec::new(["sh", "-c", "for i in 1 2 3; do echo burst$i; done"]);
    let result = run_command(&spec).await;
    assert!(result.success);
    assert_eq!(result.stdout, ["burst1", "burst2", "burst3"]);
}

#[tokio::test]
async fn cwd_is_honoured() {
    let dir = tempfile::tempdir().expect("tempdir");
    let spec = CommandSpec::new(["pwd"]).with_cwd(dir.path());
    let result = run_command(&spec).await;
    assert!(result.success);
    let printed = result.stdout.first().expect("pwd output");
    let canonical = dir.path().canonicalize().expect("canonicalize");
    assert_eq!(printed.as_str(), canonical.to_string_lossy());
}
