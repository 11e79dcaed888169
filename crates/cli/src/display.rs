// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering for command output. Every function returns a `String`;
//! the commands decide where it goes.

use std::path::Path;
use std::time::Duration;

use serde::Serialize;

use jex_core::{Comment, ExportedQuery, NormalizedIssue, QueryCatalog, QueryDefinition};

use crate::cli::SearchFormat;
use crate::client::{CurrentUser, SavedFilter};
use crate::config::Settings;
use crate::error::Result;

/// Comment bodies are cut to this many characters.
pub const COMMENT_PREVIEW_CHARS: usize = 100;

/// Number of trailing comments shown per issue.
pub const RECENT_COMMENTS: usize = 2;

#[derive(Serialize)]
struct SearchOutput<'a> {
    issues: &'a [NormalizedIssue],
    total: u64,
}

/// `Connected to: URL` and the masked token, followed by a blank line.
pub fn connection_banner(settings: &Settings) -> String {
    format!(
        "Connected to: {}\nUsing API token: {}\n",
        settings.base_url,
        settings.masked_token()
    )
}

/// Every catalog entry with its description and JQL.
pub fn format_query_list(catalog: &QueryCatalog) -> String {
    let mut out = String::from("Available queries:\n");
    if catalog.is_empty() {
        out.push_str("  (none)\n");
        return out;
    }
    for query in catalog {
        out.push_str(&format!("  {}\n", query_heading(query)));
        out.push_str(&format!("    JQL: {}\n\n", query.jql));
    }
    out
}

/// Favourite filters as `id: name` with their JQL.
pub fn format_filter_list(filters: &[SavedFilter]) -> String {
    let mut out = String::from("Favourite filters:\n");
    if filters.is_empty() {
        out.push_str("  (none)\n");
        return out;
    }
    for filter in filters {
        out.push_str(&format!("  {}: {}\n", filter.id, filter.name));
        if let Some(description) = filter.description.as_deref().filter(|d| !d.is_empty()) {
            out.push_str(&format!("    {description}\n"));
        }
        out.push_str(&format!("    JQL: {}\n\n", filter.jql));
    }
    out
}

/// `name: description`, or just the name when there is no description.
pub fn query_heading(query: &QueryDefinition) -> String {
    if query.description.is_empty() {
        query.name.clone()
    } else {
        format!("{}: {}", query.name, query.description)
    }
}

/// Renders one page of search results.
pub fn format_results(
    issues: &[NormalizedIssue],
    total: u64,
    format: SearchFormat,
) -> Result<String> {
    if let SearchFormat::Json = format {
        let json = serde_json::to_string_pretty(&SearchOutput { issues, total })?;
        return Ok(json);
    }

    let mut lines = vec![format!("Found {} issues, showing {}:", total, issues.len())];
    for issue in issues {
        match format {
            SearchFormat::Table => table_rows(issue, &mut lines),
            SearchFormat::Summary | SearchFormat::Json => summary_rows(issue, &mut lines),
        }
    }

    if total > issues.len() as u64 {
        lines.push(format!(
            "\nShowing {} of {} issues. Use --limit to see more.",
            issues.len(),
            total
        ));
    }
    Ok(lines.join("\n"))
}

fn summary_rows(issue: &NormalizedIssue, lines: &mut Vec<String>) {
    lines.push(format!(
        "  {}: {} (Status: {})",
        issue.key, issue.summary, issue.status
    ));
    let recent = recent_comments(&issue.comments);
    if recent.is_empty() {
        return;
    }
    lines.push("    Recent comments:".to_string());
    for comment in recent {
        lines.push(format!(
            "      {} - {}: {}",
            comment_date(&comment.created),
            comment.author,
            comment_preview(&comment.body)
        ));
    }
}

fn table_rows(issue: &NormalizedIssue, lines: &mut Vec<String>) {
    lines.push(format!(
        "| {} | {} | {} |",
        issue.key, issue.status, issue.summary
    ));
    for comment in recent_comments(&issue.comments) {
        lines.push(format!(
            "|  | Comment by {} | {} |",
            comment.author,
            comment_preview(&comment.body)
        ));
    }
}

/// The last [`RECENT_COMMENTS`] comments, oldest first.
pub fn recent_comments(comments: &[Comment]) -> &[Comment] {
    &comments[comments.len().saturating_sub(RECENT_COMMENTS)..]
}

/// Date part of a Jira timestamp (`2024-03-01T10:00:00.000+0000` → `2024-03-01`).
pub fn comment_date(created: &str) -> &str {
    created.split('T').next().unwrap_or(created)
}

/// Flattens newlines and cuts the body to [`COMMENT_PREVIEW_CHARS`].
///
/// A body that fills the whole preview gets a `...` suffix.
pub fn comment_preview(body: &str) -> String {
    let flat = body.replace(['\r', '\n'], " ");
    let mut preview: String = flat.chars().take(COMMENT_PREVIEW_CHARS).collect();
    if preview.chars().count() == COMMENT_PREVIEW_CHARS {
        preview.push_str("...");
    }
    preview
}

pub fn format_user(user: &CurrentUser) -> String {
    let or_unknown = |v: &Option<String>| v.clone().unwrap_or_else(|| "Unknown".to_string());
    let mut out = format!("Display name: {}\n", or_unknown(&user.display_name));
    out.push_str(&format!("Email: {}\n", or_unknown(&user.email_address)));
    match (&user.account_id, &user.name) {
        (Some(id), _) => out.push_str(&format!("Account ID: {id}")),
        (None, Some(name)) => out.push_str(&format!("Username: {name}")),
        (None, None) => out.push_str("Account ID: Unknown"),
    }
    out
}

/// One line for a query that was written.
pub fn format_exported(name: &str, exported: &ExportedQuery, elapsed: Duration) -> String {
    let mut line = format!(
        "Exported {}: {} of {} issues in {} -> {}",
        name,
        exported.exported,
        exported.total,
        format_elapsed(elapsed),
        exported.path.display()
    );
    if exported.degraded > 0 {
        line.push_str(&format!(" ({} degraded)", exported.degraded));
    }
    if exported.retried {
        line.push_str(" (retried with a smaller page)");
    }
    line
}

/// Closing line of an export run.
pub fn format_export_summary(written: usize, selected: usize, dir: &Path) -> String {
    format!(
        "Export complete: {} of {} queries written to {}/",
        written,
        selected,
        dir.display()
    )
}

pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.2}s", elapsed.as_secs_f64())
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
