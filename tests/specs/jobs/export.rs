//! Done-job export and process labelling specs

use crate::prelude::*;

const REPORT: &str = "\
1  0  done  100%  user.a.301234.ttbar.t
2  0  done  100%  user.a.305678.zjets.t
3  0  running  50%  user.a.301235.ttbar2.t
4  0  done  100%  user.a.309999.ww.t
";

#[test]
fn done_writes_tasknames_of_done_jobs() {
    let temp = Workspace::initialized();
    temp.report("status.txt", REPORT);

    temp.gb()
        .args(&["done", "download.list"])
        .passes()
        .stdout_has("Wrote 3 tasknames to download.list (3 done, 0 already exported)");
    assert_eq!(
        temp.read("download.list"),
        "user.a.301234.ttbar.t\nuser.a.305678.zjets.t\nuser.a.309999.ww.t\n"
    );
}

#[test]
fn done_skips_obsoleted_and_excluded_jobs() {
    let temp = Workspace::initialized();
    temp.report("status.txt", REPORT);
    temp.gb().args(&["obsolete", "4"]).passes();
    temp.file("exported.ids", "# downloaded last week\n1,\n");

    temp.gb()
        .args(&["done", "download.list", "--exclude", "exported.ids"])
        .passes()
        .stdout_has("(2 done, 1 already exported)");
    assert_eq!(temp.read("download.list"), "user.a.305678.zjets.t\n");
}

#[test]
fn done_exclusions_from_environment() {
    let temp = Workspace::initialized();
    temp.report("status.txt", REPORT);
    let ids = temp.file("exported.ids", "1 2 4\n");

    temp.gb().env("GB_EXPORTED_IDS", &ids).args(&["done", "download.list"]).passes();
    assert_eq!(temp.read("download.list"), "");
}

#[test]
fn done_with_unreadable_exclusions_fails() {
    let temp = Workspace::initialized();
    temp.gb().args(&["done", "download.list", "--exclude", "missing.ids"]).fails_with(1);
    assert!(!temp.exists("download.list"));
}

#[test]
fn process_labels_jobs_by_dataset_id() {
    let temp = Workspace::initialized();
    temp.report("status.txt", REPORT);
    temp.file("lookup.txt", "301234\tttbar\n305678 Zjets\n");

    temp.gb()
        .args(&["process", "--lookup", "lookup.txt"])
        .passes()
        .stdout_has("Labelled 2 jobs (2 unmatched, 0 without a dataset id)");

    temp.gb().args(&["all"]).passes().stdout_eq(
        "(1, 'done', 100.0, 'user.a.301234.ttbar.t', 0, 0, 'ttbar', 'None')\n\
         (2, 'done', 100.0, 'user.a.305678.zjets.t', 0, 0, 'Zjets', 'None')\n\
         (3, 'running', 50.0, 'user.a.301235.ttbar2.t', 0, 0, '-', 'None')\n\
         (4, 'done', 100.0, 'user.a.309999.ww.t', 0, 0, '-', 'None')\n",
    );
}

#[test]
fn process_without_lookup_fails() {
    Workspace::initialized()
        .gb()
        .args(&["process"])
        .fails_with(1)
        .stderr_has("no process lookup file");
}
