//! Report ingestion and retry registration specs

use crate::prelude::*;

#[test]
fn report_inserts_unseen_jobs_with_placeholders() {
    let temp = Workspace::initialized();
    temp.report("status.txt", "100  0  running  45%  user.x.mc.100.task\n")
        .stdout_eq("status.txt: 1 inserted, 0 updated, 0 left done, 0 filtered, 0 malformed\n");

    temp.gb()
        .args(&["all"])
        .passes()
        .stdout_eq("(100, 'running', 45.0, 'user.x.mc.100.task', 0, 0, '-', 'None')\n");
}

#[test]
fn later_report_updates_status_and_progress() {
    let temp = Workspace::initialized();
    temp.report("monday.txt", "100  0  running  45%  user.x.mc.100.task\n");
    temp.report("tuesday.txt", "100  0  finished  62.3%  user.x.mc.100.task\n")
        .stdout_has("1 updated");

    temp.gb()
        .args(&["all"])
        .passes()
        .stdout_eq("(100, 'finished', 62.3, 'user.x.mc.100.task', 0, 0, '-', 'None')\n");
}

#[test]
fn done_jobs_ignore_later_reports() {
    let temp = Workspace::initialized();
    temp.report("monday.txt", "7  0  done  100%  user.x.mc.7.task\n");
    temp.report("tuesday.txt", "7  0  failed  0%  user.x.mc.7.task\n").stdout_has("1 left done");

    temp.gb().args(&["all"]).passes().stdout_has("(7, 'done', 100.0,");
}

#[test]
fn malformed_lines_are_skipped() {
    let temp = Workspace::initialized();
    temp.report(
        "status.txt",
        "JediTaskID  Status  x  Progress  TaskName\n\
         1  0  running  10%  user.a.mc.1.t\n\
         2  0  running\n",
    )
    .stdout_has("1 inserted")
    .stdout_has("2 malformed");
}

#[test]
fn filter_flag_skips_other_tasks() {
    let temp = Workspace::initialized();
    temp.file(
        "status.txt",
        "1  0  running  10%  user.a.data18.1.t\n\
         2  0  running  10%  user.a.mc16.2.t\n",
    );
    temp.gb()
        .args(&["update", "status.txt", "--filter", "data18"])
        .passes()
        .stdout_has("1 inserted")
        .stdout_has("1 filtered");

    temp.gb().args(&["all"]).passes().stdout_has("(1, ").stdout_lacks("(2, ");
}

#[test]
fn filter_from_environment() {
    let temp = Workspace::initialized();
    temp.file("status.txt", "1  0  running  10%  user.a.mc.1.t\n");
    temp.gb()
        .env("GB_NAME_FILTER", "data18")
        .args(&["update", "status.txt"])
        .passes()
        .stdout_has("0 inserted");
}

#[test]
fn retry_directive_registers_each_id() {
    let temp = Workspace::initialized();
    temp.report(
        "status.txt",
        "1  0  failed  0%  user.a.mc.1.t\n\
         2  0  exhausted  20%  user.a.mc.2.t\n",
    );

    temp.gb()
        .args(&["update", "retry([1, 2],newOpts={'nFilesPerJob':2,'memory':4000})"])
        .passes()
        .stdout_eq("Registered retry for 2 jobs\n");

    temp.gb().args(&["all"]).passes().stdout_eq(
        "(1, 'retried', 0.0, 'user.a.mc.1.t', 0, 1, '-', ''nFilesPerJob':2,'memory':4000')\n\
         (2, 'retried', 20.0, 'user.a.mc.2.t', 0, 1, '-', ''nFilesPerJob':2,'memory':4000')\n",
    );
}

#[test]
fn retry_without_options_stores_dash_note() {
    let temp = Workspace::initialized();
    temp.report("status.txt", "1  0  finished  80%  user.a.mc.1.t\n");
    temp.gb().args(&["update", "retry([1])"]).passes();
    temp.gb().args(&["update", "retry([1])"]).passes();

    temp.gb()
        .args(&["all"])
        .passes()
        .stdout_eq("(1, 'retried', 80.0, 'user.a.mc.1.t', 0, 2, '-', '-')\n");
}

#[test]
fn retry_of_unknown_task_fails() {
    let temp = Workspace::initialized();
    temp.gb().args(&["update", "retry([99])"]).fails_with(1).stderr_has("task 99 not found");
}

#[test]
fn json_dump_has_every_column() {
    let temp = Workspace::initialized();
    temp.report("status.txt", "100  0  running  45%  user.x.mc.100.task\n");

    let run = temp.gb().args(&["all", "--output", "json"]).passes();
    let rows: serde_json::Value = serde_json::from_str(&run.stdout()).unwrap();
    assert_eq!(
        rows,
        serde_json::json!([{
            "id": 100,
            "status": "running",
            "progress": 45.0,
            "taskname": "user.x.mc.100.task",
            "obsoleted": false,
            "retries": 0,
            "process": "-",
            "note": "None"
        }])
    );
}
