use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_keyspace-analysis"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("keyspace-analysis"))
        .stdout(predicate::str::contains("--delimiters"));
}

#[test]
fn rejects_zero_port() {
    Command::new(env!("CARGO_BIN_EXE_keyspace-analysis"))
        .args(["--port", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--port"));
}

#[test]
fn rejects_zero_top() {
    Command::new(env!("CARGO_BIN_EXE_keyspace-analysis"))
        .args(["--top", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be at least 1"));
}

#[test]
fn unknown_estimate_mode_is_a_usage_error() {
    Command::new(env!("CARGO_BIN_EXE_keyspace-analysis"))
        .args(["--estimate", "exact"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("serialized-length"));
}

#[test]
fn unreachable_server_fails_without_writing_reports() {
    let dir = tempfile::tempdir().unwrap();
    let folder = dir.path().join("reports");
    Command::new(env!("CARGO_BIN_EXE_keyspace-analysis"))
        .args(["--host", "127.0.0.1", "--port", "1", "--timeout", "1", "-o"])
        .arg(&folder)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: cannot connect to 127.0.0.1:1"));
    assert!(!folder.exists());
}
