//! Integration tests for the `sql-demo` binary.

use std::process::{Command, Output};

const EXPECTED: &str = "SQL query formatted successfully!\n";

fn run_demo(args: &[&str], rust_log: Option<&str>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sql-demo"));
    cmd.args(args).env_remove("RUST_LOG");
    if let Some(level) = rust_log {
        cmd.env("RUST_LOG", level);
    }
    cmd.output().expect("run sql-demo")
}

#[test]
fn test_prints_confirmation_and_exits_zero() {
    let output = run_demo(&[], None);

    assert!(
        output.status.success(),
        "expected zero exit (stderr={})",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED);
}

#[test]
fn test_default_run_is_silent_on_stderr() {
    let output = run_demo(&[], None);
    assert!(output.stderr.is_empty());
}

#[test]
fn test_output_is_stable_across_runs() {
    let first = run_demo(&[], None);
    let second = run_demo(&[], None);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_arguments_are_ignored() {
    let output = run_demo(&["--format", "pretty", "query.sql"], None);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED);
}

#[test]
fn test_debug_logging_stays_off_stdout() {
    let output = run_demo(&[], Some("debug"));

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("confirmation written"), "stderr={stderr}");
}
