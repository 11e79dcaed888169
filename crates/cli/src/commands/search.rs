// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};
use std::path::Path;

use jex_core::{normalize_all, QueryCatalog, SearchGateway, SearchRequest};

use crate::cli::{QuerySelectArgs, SearchFormat};
use crate::client::{FilterSource, JiraClient};
use crate::config::Settings;
use crate::display::{connection_banner, format_query_list, format_results};
use crate::error::{Error, Result};
use crate::time_phase;

use super::load_catalog;

pub fn run(
    settings: &Settings,
    select: QuerySelectArgs,
    limit: u32,
    list_queries: bool,
    format: SearchFormat,
) -> Result<()> {
    let catalog = load_catalog(settings);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if list_queries {
        write!(out, "{}", format_query_list(&catalog))?;
        return Ok(());
    }

    let client = JiraClient::new(settings)?;
    run_impl(&client, settings, &catalog, &select, limit, format, &mut out)
}

/// Internal implementation that accepts a gateway and writer for testing.
pub(crate) fn run_impl<G: SearchGateway + FilterSource, W: Write>(
    gateway: &G,
    settings: &Settings,
    catalog: &QueryCatalog,
    select: &QuerySelectArgs,
    limit: u32,
    format: SearchFormat,
    out: &mut W,
) -> Result<()> {
    let (jql, context) = resolve_jql(gateway, catalog, select, &settings.queries_path)?;

    // Keep stdout parseable for JSON.
    if format == SearchFormat::Json {
        for line in &context {
            tracing::info!("{line}");
        }
    } else {
        writeln!(out, "{}", connection_banner(settings))?;
        for line in &context {
            writeln!(out, "{line}")?;
        }
        writeln!(out)?;
    }

    let request = SearchRequest::new(jql, limit, settings.timeout);
    let response = time_phase!("jira::search", gateway.search(&request))?;
    let normalized = time_phase!("normalize", normalize_all(&response.issues));

    writeln!(
        out,
        "{}",
        format_results(&normalized.issues, response.total, format)?
    )?;
    Ok(())
}

/// Picks the JQL to run and the lines describing the choice.
///
/// Custom JQL wins, then a saved filter, a preset, a named query and
/// finally the first catalog entry.
pub(crate) fn resolve_jql<F: FilterSource>(
    filters: &F,
    catalog: &QueryCatalog,
    select: &QuerySelectArgs,
    queries_path: &Path,
) -> Result<(String, Vec<String>)> {
    if let Some(jql) = &select.jql {
        return Ok((jql.clone(), vec![format!("Using custom JQL query: {jql}")]));
    }

    if let Some(id) = select.filter {
        let filter = time_phase!("jira::filter", filters.filter(id))?;
        if filter.jql.trim().is_empty() {
            return Err(Error::FilterWithoutJql { id });
        }
        let using = if filter.name.is_empty() {
            format!("Using saved filter {id}")
        } else {
            format!("Using saved filter {id}: {}", filter.name)
        };
        let line = format!("JQL: {}", filter.jql);
        return Ok((filter.jql, vec![using, line]));
    }

    if let Some(preset) = select.preset {
        let jql = preset.jql();
        return Ok((
            jql.to_string(),
            vec![
                format!("Using preset '{}'", preset.name()),
                format!("JQL: {jql}"),
            ],
        ));
    }

    let (query, label) = match &select.query {
        Some(name) => (catalog.find(name)?, "query"),
        None => {
            let first = catalog.first().ok_or_else(|| Error::NoQueries {
                path: queries_path.display().to_string(),
            })?;
            (first, "default query")
        }
    };

    let using = if query.description.is_empty() {
        format!("Using {label} '{}'", query.name)
    } else {
        format!("Using {label} '{}': {}", query.name, query.description)
    };
    Ok((query.jql.clone(), vec![using, format!("JQL: {}", query.jql)]))
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
