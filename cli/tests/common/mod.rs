//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;

/// Create a new command for the collection binary.
pub fn collection() -> Command {
    Command::new(env!("CARGO_BIN_EXE_collection"))
}

/// Run a command and return its stdout, asserting it succeeded.
pub fn stdout_of(args: &[&str]) -> String {
    let output = collection().args(args).output().expect("failed to execute command");
    assert!(output.status.success(), "command failed: {args:?}");
    String::from_utf8_lossy(&output.stdout).into_owned()
}
