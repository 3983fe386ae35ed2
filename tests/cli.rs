// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Run the built binary and check its exit status and output streams.

use std::process::{Command, Output};

fn repro(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_map-matcher-repro"))
        .args(args)
        .env_remove("REPRO_LOG")
        .output()
        .expect("failed to run map-matcher-repro")
}

#[test]
fn completes_silently() {
    let output = repro(&[]);
    assert!(output.status.success(), "{output:?}");
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[test]
fn quiet_completes_silently() {
    let output = repro(&["--quiet"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[test]
fn debug_logs_go_to_stderr() {
    let output = repro(&["--debug"]);
    assert!(output.status.success(), "{output:?}");
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("run_with"), "{stderr}");
    assert!(stderr.contains("retain"), "{stderr}");
}

#[test]
fn json_logs_are_json_lines() {
    let output = repro(&["--json-logs", "--log-level", "map_matcher_repro::driver=debug"]);
    assert!(output.status.success(), "{output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.is_empty());
    assert!(stderr.lines().all(|line| line.starts_with('{')), "{stderr}");
}

#[test]
fn bad_log_directive_fails() {
    let output = repro(&["--log-level", "driver=loudly"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"), "{stderr}");
    assert!(stderr.contains("invalid log directive"), "{stderr}");
}
