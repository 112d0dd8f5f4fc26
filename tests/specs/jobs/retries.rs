//! Retry listing specs

use crate::prelude::*;

const REPORT: &str = "\
1  0  running  10%  user.a.mc.1.t
2  0  finished  30%  user.a.mc.2.t
3  0  finished  80%  user.a.mc.3.t
4  0  failed  0%  user.a.mc.4.t
5  0  broken  0%  user.a.mc.5.t
6  0  done  100%  user.a.mc.6.t
";

#[test]
fn listing_groups_jobs_and_suggests_directives() {
    let temp = Workspace::initialized();
    temp.report("status.txt", REPORT);

    temp.gb().args(&["retries"]).passes().stdout_eq(
        "
Status of jobs which are not done:
  - Still running:
(1, 'running', 10.0, 'user.a.mc.1.t', 0, 0, '-', 'None')

  - Not running:
(2, 'finished', 30.0, 'user.a.mc.2.t', 0, 0, '-', 'None')
(3, 'finished', 80.0, 'user.a.mc.3.t', 0, 0, '-', 'None')
(4, 'failed', 0.0, 'user.a.mc.4.t', 0, 0, '-', 'None')
(5, 'broken', 0.0, 'user.a.mc.5.t', 0, 0, '-', 'None')

SUGGESTIONS:

1 finished with < 60%:
retry([2],newOpts={'nFilesPerJob':2,'memory':4000})

1 finished with >= 60%:
retry([3])

1 failed:
retry([4],newOpts={'nFilesPerJob':2,'memory':4000})

1 broken and need resubmitting:
  user.a.mc.5.t
",
    );
}

#[test]
fn empty_table_lists_nothing_to_do() {
    Workspace::initialized().gb().args(&["retries"]).passes().stdout_eq(
        "
Status of jobs which are not done:
  - Still running:

  - Not running:

SUGGESTIONS:
",
    );
}

#[test]
fn suggested_directive_can_be_fed_back() {
    let temp = Workspace::initialized();
    temp.report("status.txt", "4  0  failed  0%  user.a.mc.4.t\n");

    temp.gb()
        .args(&["update", "retry([4],newOpts={'nFilesPerJob':2,'memory':4000})"])
        .passes();
    temp.gb()
        .args(&["retries"])
        .passes()
        .stdout_has("  - Still running:\n(4, 'retried', 0.0,")
        .stdout_lacks("1 failed:");
}
