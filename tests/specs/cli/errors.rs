//! CLI error handling specs
//!
//! Usage problems exit 2, operational failures exit 1, and neither mutates
//! the table.

use crate::prelude::*;

#[test]
fn unknown_command_is_usage_error() {
    cli().args(&["frobnicate"]).fails_with(2);
}

#[test]
fn update_with_unrecognised_input_is_usage_error() {
    let temp = Workspace::initialized();
    temp.gb()
        .args(&["update", "status.log"])
        .fails_with(2)
        .stderr_has("unrecognised update input 'status.log'");
    temp.gb().args(&["all"]).passes().stdout_eq("");
}

#[test]
fn update_without_input_is_usage_error() {
    Workspace::initialized().gb().args(&["update"]).fails_with(2);
}

#[test]
fn command_before_init_reports_missing_table() {
    Workspace::empty()
        .gb()
        .args(&["retries"])
        .fails_with(1)
        .stderr_has("Error: table JOB does not exist (run `gb init` first)");
}

#[test]
fn missing_report_file_fails() {
    Workspace::initialized()
        .gb()
        .args(&["update", "missing.txt"])
        .fails_with(1)
        .stderr_has("missing.txt");
}

#[test]
fn malformed_config_file_fails() {
    let temp = Workspace::empty();
    let config = temp.file("config.toml", "database = [\n");
    temp.gb().env("GB_CONFIG", &config).args(&["all"]).fails_with(1).stderr_has("config.toml");
}

#[test]
fn config_file_selects_database() {
    let temp = Workspace::empty();
    let db = temp.path("from-config.db");
    let config = temp.file("config.toml", &format!("database = {:?}\n", db.display().to_string()));

    cli()
        .env("GB_CONFIG", &config)
        .env("GB_STATE_DIR", temp.path("state"))
        .args(&["init"])
        .passes();
    assert!(db.exists());
}

#[test]
fn db_flag_overrides_environment() {
    let temp = Workspace::empty();
    temp.gb().args(&["--db", "flag.db", "init"]).passes();
    assert!(temp.exists("flag.db"));
    assert!(!temp.exists("state/gridbook.db"));
}
