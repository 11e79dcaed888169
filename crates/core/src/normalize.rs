// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Raw Jira issue normalization.
//!
//! Converts the nested `/search` issue JSON into a [`NormalizedIssue`].
//! Absent or `null` fields become documented placeholders. Fields of the
//! wrong type make [`try_normalize`] fail; [`normalize`] turns that failure
//! into a degraded record instead, so it is total over any input.

use serde_json::Value;

use crate::artifact::{
    Comment, NormalizedIssue, DEFAULT_ASSIGNEE, DEFAULT_KEY, DEFAULT_NAME, DEFAULT_SUMMARY,
};
use crate::path::{kind, Node, TypeMismatch};

/// Why a raw issue could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error(transparent)]
    UnexpectedType(#[from] TypeMismatch),
}

/// Normalized issues for one page, with the number that had to be degraded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeOutcome {
    pub issues: Vec<NormalizedIssue>,
    pub degraded: usize,
}

/// Normalizes one raw issue, failing on fields of an unexpected type.
pub fn try_normalize(raw: &Value) -> Result<NormalizedIssue, NormalizeError> {
    if !raw.is_object() {
        return Err(TypeMismatch {
            path: "<root>".to_string(),
            expected: "object",
            found: kind(raw),
        }
        .into());
    }

    let root = Node::root(raw);
    let key = root.str_or(&["key"], DEFAULT_KEY)?;
    let fields = root.get(&["fields"])?;

    let Some(fields) = fields else {
        return Ok(NormalizedIssue::with_key(key));
    };

    let components = fields
        .list(&["components"])?
        .iter()
        .map(|c| c.get(&["name"]))
        .filter_map(|name| name.transpose())
        .map(|name| name.and_then(|n| n.as_str().map(String::from)))
        .collect::<Result<Vec<_>, _>>()?;

    let labels = fields
        .list(&["labels"])?
        .iter()
        .map(|l| l.as_str().map(String::from))
        .collect::<Result<Vec<_>, _>>()?;

    let comments = fields
        .list(&["comment", "comments"])?
        .iter()
        .map(|c| {
            Ok(Comment {
                author: c.str_or(&["author", "displayName"], DEFAULT_NAME)?,
                body: c.text_or(&["body"], "")?,
                created: c.str_or(&["created"], "")?,
            })
        })
        .collect::<Result<Vec<_>, TypeMismatch>>()?;

    Ok(NormalizedIssue {
        key,
        summary: fields.str_or(&["summary"], DEFAULT_SUMMARY)?,
        description: fields.text_or(&["description"], "")?,
        status: fields.str_or(&["status", "name"], DEFAULT_NAME)?,
        issue_type: fields.str_or(&["issuetype", "name"], DEFAULT_NAME)?,
        priority: fields.str_or(&["priority", "name"], DEFAULT_NAME)?,
        created: fields.str_or(&["created"], "")?,
        updated: fields.str_or(&["updated"], "")?,
        assignee: fields.str_or(&["assignee", "displayName"], DEFAULT_ASSIGNEE)?,
        reporter: fields.str_or(&["reporter", "displayName"], DEFAULT_NAME)?,
        components,
        labels,
        comments,
    })
}

/// Normalizes one raw issue. Never fails.
///
/// On error the diagnostic goes to the log (stderr) and a degraded record is
/// returned: key kept when readable, summary `"Error processing issue"`,
/// description holding the error message.
pub fn normalize(raw: &Value) -> NormalizedIssue {
    match try_normalize(raw) {
        Ok(issue) => issue,
        Err(e) => degrade(raw, &e),
    }
}

/// Normalizes a page of raw issues, counting degraded records.
pub fn normalize_all(raw: &[Value]) -> NormalizeOutcome {
    let mut outcome = NormalizeOutcome::default();
    for issue in raw {
        match try_normalize(issue) {
            Ok(normalized) => outcome.issues.push(normalized),
            Err(e) => {
                outcome.issues.push(degrade(issue, &e));
                outcome.degraded += 1;
            }
        }
    }
    outcome
}

fn degrade(raw: &Value, error: &NormalizeError) -> NormalizedIssue {
    let key = raw.get("key").and_then(Value::as_str).map(String::from);
    tracing::warn!(
        key = key.as_deref().unwrap_or(DEFAULT_KEY),
        error = %error,
        "error processing issue"
    );
    NormalizedIssue::degraded(key, &error.to_string())
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
