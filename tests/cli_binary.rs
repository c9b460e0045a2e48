//! Process-level checks of the `client-menu` binary: exit codes and stderr.

#![cfg(feature = "cli")]

mod common;

use std::fs;

use common::run_cli_case;

#[test]
fn exit_command_ends_with_status_zero() {
    let r = run_cli_case(&["--no-color"], b"3\n");
    assert!(r.status.success(), "stderr: {}", r.stderr);
    assert!(r.stdout.starts_with("Client Management Console\n"));
    assert!(r.stdout.ends_with("Select: Exiting program.\n"));
    assert!(r.stderr.is_empty(), "unexpected stderr: {}", r.stderr);
}

#[test]
fn closed_stdin_ends_with_status_zero() {
    let r = run_cli_case(&["--no-color"], b"");
    assert!(r.status.success(), "stderr: {}", r.stderr);
    assert!(r.stdout.ends_with("Select: \nExiting program.\n"));
}

#[test]
fn non_utf8_input_does_not_abort_the_session() {
    let r = run_cli_case(&["--no-color", "--admin"], b"\xff\n2\n3\n");
    assert_eq!(r.status.code(), Some(0), "stderr: {}", r.stderr);
    assert!(r.stdout.contains("Invalid input."));
    assert!(r.stdout.contains("--- Customer Information ---"));
}

#[test]
fn missing_config_file_exits_with_user_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let r = run_cli_case(&["--config", path.to_str().unwrap()], b"3\n");
    assert_eq!(r.status.code(), Some(1));
    assert!(r.stderr.contains("CMU-1002"), "stderr: {}", r.stderr);
    assert!(r.stdout.is_empty());
}

#[test]
fn invalid_config_file_exits_with_user_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menu.toml");
    fs::write(&path, "[display]\nbanner = \"\"\n").unwrap();
    let r = run_cli_case(&["--config", path.to_str().unwrap()], b"3\n");
    assert_eq!(r.status.code(), Some(1));
    assert!(r.stderr.contains("CMU-1001"), "stderr: {}", r.stderr);
}

#[test]
fn quiet_suppresses_activity_log_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, b"file").unwrap();
    let log = blocker.join("activity.jsonl");
    let log = log.to_str().unwrap();

    let loud = run_cli_case(&["--no-color", "--activity-log", log], b"3\n");
    assert!(loud.status.success());
    assert!(loud.stderr.contains("[CMU-JSONL]"));

    let quiet = run_cli_case(&["--no-color", "--quiet", "--activity-log", log], b"3\n");
    assert!(quiet.status.success());
    assert!(quiet.stderr.is_empty(), "unexpected stderr: {}", quiet.stderr);
    assert!(quiet.stdout.contains("Exiting program."));
}

#[test]
fn verbose_reports_effective_config_and_summary() {
    let r = run_cli_case(&["--no-color", "--verbose", "--admin"], b"1\n2\n3\n");
    assert!(r.status.success());
    assert!(r.stderr.contains("[CMU-CONFIG] effective config:"));
    assert!(r.stderr.contains("admin = true"));
    assert!(r.stderr.contains("[CMU-MENU] session summary:"));
    assert!(r.stderr.contains("\"last_choice\":2"));
}
