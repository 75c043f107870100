//! Integration Tests

extern crate assert_cli;
extern crate tempdir;

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use assert_cli::Assert;
use tempdir::TempDir;

trait AssertExt {
    fn exit_status_is(self, exit_status: i32) -> Self;
}

impl AssertExt for Assert {
    fn exit_status_is(self, exit_status: i32) -> Self {
        if exit_status == 0 {
            self.succeeds()
        } else {
            self.fails_with(exit_status)
        }
    }
}

fn jsh() -> Assert {
    Assert::cargo_binary("jsh")
}

/// Path to the built jsh binary, for tests that drive its stdin directly.
fn jsh_binary() -> PathBuf {
    env::current_exe()
        .expect("test executable path")
        .parent()
        .expect("test executable directory")
        .join("../jsh")
}

#[test]
fn test_exit_sets_process_status() {
    jsh().with_args(&["-c", "exit 85"]).exit_status_is(85).unwrap();
}

#[test]
fn test_exit_without_argument_defaults_to_zero() {
    jsh().with_args(&["-c", "exit"]).exit_status_is(0).unwrap();
}

#[test]
fn test_exit_via_stdin() {
    jsh().stdin("exit 7\n").exit_status_is(7).unwrap();
}

#[test]
fn test_exit_rejects_non_numeric_argument() {
    jsh()
        .with_args(&["-c", "exit abc"])
        .stderr()
        .contains("Error in system call")
        .exit_status_is(0)
        .unwrap();
}

#[test]
fn test_exit_rejects_extra_arguments() {
    jsh()
        .with_args(&["-c", "exit 1 2"])
        .stderr()
        .contains("Error in system call")
        .exit_status_is(0)
        .unwrap();
}

#[test]
fn test_unterminated_quote_is_reported() {
    jsh()
        .with_args(&["-c", "echo \"unterminated"])
        .stderr()
        .contains("Error in system call")
        .exit_status_is(0)
        .unwrap();
}

#[test]
fn test_cd_rejects_extra_arguments() {
    jsh()
        .with_args(&["-c", "cd a b"])
        .stderr()
        .contains("Error in system call")
        .exit_status_is(0)
        .unwrap();
}

#[test]
fn test_cd_dash_without_history_is_reported() {
    jsh()
        .stdin("cd -\nexit\n")
        .stderr()
        .contains("Error in system call")
        .exit_status_is(0)
        .unwrap();
}

#[test]
fn test_unknown_command_reports_error_and_exits_cleanly() {
    jsh()
        .with_args(&["-c", "definitely-not-a-command"])
        .stderr()
        .contains("Error in system call")
        .exit_status_is(0)
        .unwrap();
}

#[test]
fn test_foreground_command_runs_to_completion() {
    jsh().with_args(&["-c", "true"]).exit_status_is(0).unwrap();
}

#[test]
fn test_version_flag() {
    jsh()
        .with_args(&["--version"])
        .stdout()
        .contains("jsh version")
        .exit_status_is(0)
        .unwrap();
}

#[test]
fn test_jobs_lists_background_jobs_in_launch_order() {
    let mut child = Command::new(jsh_binary())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to start jsh");

    child
        .stdin
        .as_mut()
        .expect("stdin should be piped")
        .write_all(b"sleep 5 &\nsleep 6 &\njobs\nexit\n")
        .expect("failed to write commands");

    let output = child.wait_with_output().expect("failed to collect output");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    // One pid per launch, one line per job, then the exit builtin's pid.
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[2], format!("{} sleep 5", lines[0]));
    assert_eq!(lines[3], format!("{} sleep 6", lines[1]));
}

#[test]
fn test_jobs_after_completion_lists_nothing() {
    let mut child = Command::new(jsh_binary())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to start jsh");

    child
        .stdin
        .as_mut()
        .expect("stdin should be piped")
        .write_all(b"true &\nsleep 1\njobs\nexit\n")
        .expect("failed to write commands");

    let output = child.wait_with_output().expect("failed to collect output");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    // Launch pids and the exit pid only; the reaped job is not listed.
    assert_eq!(stdout.lines().count(), 3);
}

#[test]
fn test_script_file_stops_after_exit() {
    let temp_dir = TempDir::new("jsh-test").expect("unable to create temp dir");
    let script_path = temp_dir.path().join("script.jsh");
    let mut file = File::create(&script_path).expect("unable to create script");
    file.write_all(b"exit 4\nexit 9\n")
        .expect("unable to write script");
    drop(file);

    jsh()
        .with_args(&[script_path.to_str().expect("script path should be valid Unicode")])
        .exit_status_is(4)
        .unwrap();
}
