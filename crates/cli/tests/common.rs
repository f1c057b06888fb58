// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::path::PathBuf;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// An isolated home with its own database and config directories.
pub struct Sandbox {
    pub temp: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Sandbox {
            temp: TempDir::new().unwrap(),
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.temp.path().join("data").join("tasks.db")
    }

    /// A `tsk` command bound to this sandbox's database.
    pub fn tsk(&self) -> Command {
        let mut cmd = self.bare();
        cmd.env("TSK_DB", self.db_path());
        cmd
    }

    /// A `tsk` command isolated from the user's environment but without
    /// `TSK_DB`, so config resolution applies.
    pub fn bare(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("tsk");
        cmd.env("HOME", self.temp.path())
            .env("XDG_CONFIG_HOME", self.temp.path().join("config"))
            .env("XDG_DATA_HOME", self.temp.path().join("share"))
            .env("NO_COLOR", "1")
            .env_remove("TSK_DB")
            .env_remove("TSK_DEBUG")
            .env_remove("DEBUG")
            .env_remove("RUST_LOG")
            .env_remove("COLOR");
        cmd
    }

    /// Create a task from words and return its short id.
    pub fn add(&self, words: &[&str]) -> i64 {
        let output = self.tsk().arg("add").args(words).output().unwrap();
        assert!(output.status.success(), "add failed: {:?}", output);
        String::from_utf8_lossy(&output.stdout)
            .trim()
            .strip_prefix("Created task ")
            .unwrap()
            .parse()
            .unwrap()
    }

    /// Parsed `list --format json` output for the given filters.
    pub fn list_json(&self, words: &[&str]) -> serde_json::Value {
        let output = self
            .tsk()
            .args(["list", "--format", "json"])
            .args(words)
            .output()
            .unwrap();
        assert!(output.status.success(), "list failed: {:?}", output);
        serde_json::from_slice(&output.stdout).unwrap()
    }

    /// Short ids listed for the given filters.
    pub fn listed_ids(&self, words: &[&str]) -> Vec<i64> {
        self.list_json(words)
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_i64().unwrap())
            .collect()
    }
}
