// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Export data model: the flat issue schema and the per-query artifact.

use serde::{Deserialize, Serialize};

use crate::catalog::QueryDefinition;

pub const DEFAULT_KEY: &str = "unknown";
pub const DEFAULT_SUMMARY: &str = "No summary";
pub const DEFAULT_NAME: &str = "Unknown";
pub const DEFAULT_ASSIGNEE: &str = "Unassigned";
pub const DEGRADED_SUMMARY: &str = "Error processing issue";

/// One comment on a normalized issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub body: String,
    pub created: String,
}

/// A Jira issue flattened for export. Every field always has a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedIssue {
    pub key: String,
    pub summary: String,
    pub description: String,
    pub status: String,
    pub issue_type: String,
    pub priority: String,
    pub created: String,
    pub updated: String,
    pub assignee: String,
    pub reporter: String,
    pub components: Vec<String>,
    pub labels: Vec<String>,
    pub comments: Vec<Comment>,
}

impl NormalizedIssue {
    /// An issue with every field at its default.
    pub fn with_key(key: impl Into<String>) -> Self {
        NormalizedIssue {
            key: key.into(),
            summary: DEFAULT_SUMMARY.to_string(),
            description: String::new(),
            status: DEFAULT_NAME.to_string(),
            issue_type: DEFAULT_NAME.to_string(),
            priority: DEFAULT_NAME.to_string(),
            created: String::new(),
            updated: String::new(),
            assignee: DEFAULT_ASSIGNEE.to_string(),
            reporter: DEFAULT_NAME.to_string(),
            components: Vec::new(),
            labels: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Placeholder for an issue that could not be normalized.
    pub fn degraded(key: Option<String>, error: &str) -> Self {
        NormalizedIssue {
            summary: DEGRADED_SUMMARY.to_string(),
            description: error.to_string(),
            ..Self::with_key(key.unwrap_or_else(|| DEFAULT_KEY.to_string()))
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.summary == DEGRADED_SUMMARY
    }
}

impl Default for NormalizedIssue {
    fn default() -> Self {
        Self::with_key(DEFAULT_KEY)
    }
}

/// Provenance attached to every artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub name: String,
    pub description: String,
    pub jql: String,
    /// RFC 3339 timestamp of the export.
    pub exported_at: String,
    pub total_issues: u64,
}

/// The file written for one query: `<root>/<date>/<name>.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportArtifact {
    pub issues: Vec<NormalizedIssue>,
    /// Total reported by Jira, which may exceed `issues.len()`.
    pub total: u64,
    pub metadata: ExportMetadata,
}

impl ExportArtifact {
    pub fn new(
        query: &QueryDefinition,
        issues: Vec<NormalizedIssue>,
        total: u64,
        exported_at: String,
    ) -> Self {
        ExportArtifact {
            issues,
            total,
            metadata: ExportMetadata {
                name: query.name.clone(),
                description: query.description.clone(),
                jql: query.jql.clone(),
                exported_at,
                total_issues: total,
            },
        }
    }
}

#[cfg(test)]
#[path = "artifact_tests.rs"]
mod tests;
