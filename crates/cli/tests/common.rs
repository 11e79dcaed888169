// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::unwrap_used)]

use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

const ISOLATED_VARS: &[&str] = &[
    "JIRA_BASE_URL",
    "JIRA_API_TOKEN",
    "JIRA_EMAIL",
    "JEX_QUERIES",
    "JEX_EXPORT_ROOT",
    "JEX_TIMEOUT_SECS",
    "JEX_DEBUG",
    "JEX_TIMINGS",
    "RUST_LOG",
];

pub const TWO_QUERIES: &str = "\
queries:
  - name: mine
    description: My open issues
    jql: assignee = currentUser() AND resolution = Unresolved
  - name: recent
    description: Updated this week
    jql: updated >= -7d
";

/// `jex` with every variable it reads cleared, running inside `temp`.
pub fn jex(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("jex");
    for var in ISOLATED_VARS {
        cmd.env_remove(var);
    }
    cmd.current_dir(temp.path());
    cmd
}

/// `jex` pointed at a Jira base URL with a token.
pub fn jex_with_jira(temp: &TempDir, base_url: &str) -> Command {
    let mut cmd = jex(temp);
    cmd.env("JIRA_BASE_URL", base_url)
        .env("JIRA_API_TOKEN", "test-token-1234");
    cmd
}

/// Writes a query file into `temp` and returns its path.
pub fn write_queries(temp: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = temp.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// The single dated directory an export run created under `root`.
pub fn run_dir(root: &Path) -> PathBuf {
    let mut dirs: Vec<PathBuf> = std::fs::read_dir(root)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(dirs.len(), 1, "expected one dated directory in {root:?}");
    dirs.remove(0)
}

/// A raw Jira issue as `/search` returns it.
pub fn raw_issue(key: &str, summary: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "key": key,
        "fields": {
            "summary": summary,
            "status": {"name": status},
            "issuetype": {"name": "Task"},
            "priority": {"name": "Medium"},
            "assignee": {"displayName": "Ada Lovelace"},
            "reporter": {"displayName": "Grace Hopper"},
            "created": "2026-03-01T10:00:00.000+0000",
            "updated": "2026-03-02T10:00:00.000+0000",
            "labels": ["backend"],
            "components": [{"name": "api"}],
            "comment": {
                "comments": [
                    {"author": {"displayName": "Bo"}, "body": "looking", "created": "2026-03-01T11:00:00.000+0000"}
                ]
            }
        }
    })
}
