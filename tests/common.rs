#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated environment: config home and database live in a temp dir.
pub struct TestEnv {
    pub home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().expect("create temp home"),
        }
    }

    pub fn db_path(&self) -> String {
        self.home
            .path()
            .join("test_yeeks.sqlite")
            .to_string_lossy()
            .to_string()
    }

    /// `yeeks --db <tmp>` with `YEEKS_HOME` pointing at the temp dir.
    pub fn yeeks(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("yeeks");
        cmd.env("YEEKS_HOME", self.home.path())
            .env_remove("RUST_LOG")
            .args(["--db", &self.db_path()]);
        cmd
    }

    /// Same as `yeeks()` but without a database override.
    pub fn yeeks_bare(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("yeeks");
        cmd.env("YEEKS_HOME", self.home.path()).env_remove("RUST_LOG");
        cmd
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.home.path().join(name)
    }

    /// Save a note through the CLI and assert success.
    pub fn set_note(&self, year: &str, week: &str, text: &str) {
        self.yeeks()
            .args(["--year", year, "note", "set", week, text])
            .assert()
            .success();
    }
}
