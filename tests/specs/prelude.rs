//! Fluent helpers for driving the `gb` binary in a scratch directory.

use std::path::PathBuf;
use std::process::Output;

use tempfile::TempDir;

/// Environment variables that would leak the caller's setup into a spec.
const ISOLATED_ENV: &[&str] = &[
    "GB_DB",
    "GB_CONFIG",
    "GB_STATE_DIR",
    "GB_PROCESS_LOOKUP",
    "GB_EXPORTED_IDS",
    "GB_NAME_FILTER",
    "GB_LOG",
    "COLOR",
];

/// `gb` with no database configured; for help and usage checks.
pub fn cli() -> CliBuilder {
    let mut cmd = assert_cmd::Command::cargo_bin("gb").unwrap();
    for key in ISOLATED_ENV {
        cmd.env_remove(key);
    }
    cmd.env("NO_COLOR", "1");
    cmd.env("GB_CONFIG", "/nonexistent/gridbook/config.toml");
    CliBuilder { cmd }
}

pub struct CliBuilder {
    cmd: assert_cmd::Command,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    fn run(mut self) -> RunAssert {
        RunAssert { output: self.cmd.output().unwrap() }
    }

    /// Run and assert exit status 0.
    pub fn passes(self) -> RunAssert {
        let run = self.run();
        assert!(
            run.output.status.success(),
            "expected success, got {:?}\nstdout:\n{}\nstderr:\n{}",
            run.output.status.code(),
            run.stdout(),
            run.stderr()
        );
        run
    }

    /// Run and assert a non-zero exit status.
    pub fn fails(self) -> RunAssert {
        let run = self.run();
        assert!(
            !run.output.status.success(),
            "expected failure\nstdout:\n{}\nstderr:\n{}",
            run.stdout(),
            run.stderr()
        );
        run
    }

    pub fn fails_with(self, code: i32) -> RunAssert {
        let run = self.fails();
        assert_eq!(run.output.status.code(), Some(code), "stderr:\n{}", run.stderr());
        run
    }
}

pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(stdout.contains(expected), "stdout missing {:?}:\n{}", expected, stdout);
        self
    }

    pub fn stdout_lacks(self, unexpected: &str) -> Self {
        let stdout = self.stdout();
        assert!(!stdout.contains(unexpected), "stdout has {:?}:\n{}", unexpected, stdout);
        self
    }

    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(stderr.contains(expected), "stderr missing {:?}:\n{}", expected, stderr);
        self
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }
}

/// A scratch directory holding the database and any input files.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn empty() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    /// Workspace with the job table already created.
    pub fn initialized() -> Self {
        let temp = Self::empty();
        temp.gb().args(&["init"]).passes();
        temp
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    pub fn db(&self) -> PathBuf {
        self.path("state/gridbook.db")
    }

    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.path(rel)).unwrap()
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.path(rel).exists()
    }

    /// `gb` run from the workspace with its database selected via `GB_DB`.
    pub fn gb(&self) -> CliBuilder {
        let mut builder = cli().env("GB_DB", self.db()).env("GB_STATE_DIR", self.path("state"));
        builder.cmd.current_dir(self.dir.path());
        builder
    }

    /// Ingest a report written to `name`.
    pub fn report(&self, name: &str, content: &str) -> RunAssert {
        self.file(name, content);
        self.gb().args(&["update", name]).passes()
    }
}
