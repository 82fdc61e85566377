//! Startup tests for the `news-bot` binary's environment handling.
//!
//! Each run uses a blank token so the process stops right after argument
//! parsing and validation, before any network access.

use std::process::{Command, Output};

fn run_with_env(vars: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_news-bot"));
    cmd.env("DISCORD_TOKEN", " ");
    for (key, value) in vars {
        cmd.env(key, value);
    }
    cmd.output().unwrap()
}

fn assert_reached_validation(output: &Output) {
    let stderr = String::from_utf8_lossy(&output.stderr);
    // Clap exits with 2 on parse errors; validation errors exit with 1.
    assert_eq!(output.status.code(), Some(1), "stderr: {stderr}");
    assert!(stderr.contains("Discord token is empty"), "stderr: {stderr}");
}

#[test]
fn test_common_boolean_no_health_values_are_accepted() {
    for value in ["1", "0", "yes", "off", "true"] {
        let output = run_with_env(&[("NEWS_BOT_NO_HEALTH", value)]);
        assert_reached_validation(&output);
    }
}

#[test]
fn test_zero_heartbeat_interval_fails_parsing() {
    let output = run_with_env(&[("HEARTBEAT_INTERVAL_SECS", "0")]);

    assert_eq!(output.status.code(), Some(2));
}
