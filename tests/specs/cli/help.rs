//! CLI help output specs
//!
//! Verify help text displays for all commands.

use crate::prelude::*;

#[test]
fn gb_no_args_shows_usage_and_fails() {
    cli().fails_with(2).stderr_has("Usage:");
}

#[test]
fn gb_help_lists_every_command() {
    let run = cli().args(&["--help"]).passes().stdout_has("Usage:");
    for command in ["init", "drop", "update", "retries", "obsolete", "all", "active", "process", "done"]
    {
        assert!(run.stdout().contains(command), "help missing {command}");
    }
}

#[test]
fn gb_update_help_shows_filter() {
    cli().args(&["update", "--help"]).passes().stdout_has("--filter");
}

#[test]
fn gb_all_help_shows_output_formats() {
    cli().args(&["all", "--help"]).passes().stdout_has("--output").stdout_has("json");
}

#[test]
fn gb_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}
