use std::process::{Command, Output};

fn qcfg(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_qcfg"))
        .args(args)
        .arg("--no-color")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run qcfg")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn check_succeeds_for_quota_names() {
    let output = qcfg(&["--check", "producer_byte_rate", "--check", "request_percentage"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("producer_byte_rate: quota config"));
}

#[test]
fn check_fails_for_other_names() {
    let output = qcfg(&["--check", "PRODUCER_BYTE_RATE"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("not a quota config"));
}

#[test]
fn check_does_not_build_the_schema() {
    // A repeated mechanism would fail the user schema build with exit code 2
    let output = qcfg(&["-s", "user", "-m", "X", "-m", "X", "--check", "producer_byte_rate"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn repeated_mechanism_fails_schema_build() {
    let output = qcfg(&["-s", "user", "-m", "X", "-m", "X"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("defined twice"));
}

#[test]
fn set_resolves_overrides() {
    let output = qcfg(&["-f", "simple", "--set", "request_percentage=50"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("request_percentage = 50 [override]"));
}

#[test]
fn set_rejects_repeated_name() {
    let output = qcfg(&["--set", "producer_byte_rate=1", "--set", "producer_byte_rate=2"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("overridden more than once"));
}

#[test]
fn set_rejects_non_finite_rate() {
    let output = qcfg(&["-f", "json", "--set", "request_percentage=NaN"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("expected a finite double"));
    assert!(stdout(&output).is_empty());
}
