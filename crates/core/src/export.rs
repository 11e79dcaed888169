// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Export orchestration.
//!
//! Runs catalog queries one at a time through a [`SearchGateway`],
//! normalizes the results and writes one artifact per query into a dated
//! directory:
//!
//! ```text
//! <export_root>/2026-03-14/mine.json
//! <export_root>/2026-03-14/recent.json
//! ```
//!
//! A failing query is recorded in its [`QueryOutcome`] and the run moves on.
//! Only an unusable export directory aborts the run.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate};

use crate::artifact::ExportArtifact;
use crate::catalog::{QueryCatalog, QueryDefinition};
use crate::error::Result;
use crate::gateway::{GatewayError, SearchGateway, SearchRequest, SearchResponse};
use crate::normalize::normalize_all;

pub const DEFAULT_EXPORT_ROOT: &str = "jira_exports";
pub const DEFAULT_MAX_RESULTS: u32 = 50;
/// Page size for the single retry after a timeout or server error.
pub const DEFAULT_RETRY_MAX_RESULTS: u32 = 20;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Export run settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub export_root: PathBuf,
    pub max_results: u32,
    pub retry_max_results: u32,
    /// Upper bound for each gateway call.
    pub timeout: Duration,
    /// Fields to request; `None` lets Jira choose.
    pub fields: Option<Vec<String>>,
}

impl ExportConfig {
    pub fn new(export_root: impl Into<PathBuf>) -> Self {
        ExportConfig {
            export_root: export_root.into(),
            ..Self::default()
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            export_root: PathBuf::from(DEFAULT_EXPORT_ROOT),
            max_results: DEFAULT_MAX_RESULTS,
            retry_max_results: DEFAULT_RETRY_MAX_RESULTS,
            timeout: DEFAULT_TIMEOUT,
            fields: None,
        }
    }
}

/// Why a single query produced no artifact.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("gateway error: {0}")]
    Gateway(GatewayError),

    #[error("empty response from Jira")]
    EmptyResponse,

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl From<GatewayError> for ExportError {
    fn from(e: GatewayError) -> Self {
        match e {
            GatewayError::EmptyResponse => ExportError::EmptyResponse,
            GatewayError::MalformedBody(reason) => ExportError::Serialization(reason),
            other => ExportError::Gateway(other),
        }
    }
}

/// A query that was written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedQuery {
    pub path: PathBuf,
    /// Issues written to the artifact.
    pub exported: usize,
    /// Total reported by Jira.
    pub total: u64,
    /// Issues written as degraded placeholders.
    pub degraded: usize,
    /// Whether the reduced-page retry was needed.
    pub retried: bool,
}

/// What happened to one query.
#[derive(Debug)]
pub struct QueryOutcome {
    pub query: QueryDefinition,
    pub elapsed: Duration,
    pub result: std::result::Result<ExportedQuery, ExportError>,
}

impl QueryOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Summary of an export run.
#[derive(Debug)]
pub struct ExportReport {
    /// The dated directory artifacts were written to.
    pub dir: PathBuf,
    /// One entry per selected query, in catalog order.
    pub outcomes: Vec<QueryOutcome>,
    /// Requested names that matched nothing in the catalog.
    pub unknown: Vec<String>,
}

impl ExportReport {
    /// Paths of the artifacts written during the run.
    pub fn written(&self) -> Vec<&Path> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok())
            .map(|e| e.path.as_path())
            .collect()
    }

    /// Queries that failed, with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&QueryDefinition, &ExportError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (&o.query, e)))
    }
}

/// Drives catalog queries through a gateway into dated artifacts.
pub struct Exporter<G: SearchGateway> {
    gateway: G,
    config: ExportConfig,
    run_date: NaiveDate,
}

impl<G: SearchGateway> Exporter<G> {
    /// Creates an exporter writing under today's (local) date.
    pub fn new(gateway: G, config: ExportConfig) -> Self {
        Exporter {
            gateway,
            config,
            run_date: Local::now().date_naive(),
        }
    }

    /// Pins the date used for the export directory.
    pub fn with_run_date(mut self, run_date: NaiveDate) -> Self {
        self.run_date = run_date;
        self
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// `<export_root>/<YYYY-MM-DD>`.
    pub fn run_dir(&self) -> PathBuf {
        self.config
            .export_root
            .join(self.run_date.format("%Y-%m-%d").to_string())
    }

    /// Exports every selected query in catalog order.
    ///
    /// `targets` filters by name (all entries when `None`). `on_query` sees
    /// each outcome as soon as it is known.
    ///
    /// # Errors
    ///
    /// Fails only if the dated export directory cannot be created.
    pub fn export_all<F>(
        &self,
        catalog: &QueryCatalog,
        targets: Option<&[String]>,
        mut on_query: F,
    ) -> Result<ExportReport>
    where
        F: FnMut(&QueryOutcome),
    {
        let (queries, unknown) = match targets {
            Some(names) => {
                let selection = catalog.select(names);
                (selection.queries, selection.unknown)
            }
            None => (catalog.iter().collect(), Vec::new()),
        };

        for name in &unknown {
            tracing::warn!(query = %name, "query not found in catalog");
        }

        let dir = self.run_dir();
        fs::create_dir_all(&dir)?;
        tracing::debug!(dir = %dir.display(), "using export directory");

        let mut outcomes = Vec::with_capacity(queries.len());
        for query in queries {
            let outcome = self.export_query(&dir, query);
            on_query(&outcome);
            outcomes.push(outcome);
        }

        Ok(ExportReport {
            dir,
            outcomes,
            unknown,
        })
    }

    /// Runs, normalizes and writes a single query into `dir`.
    pub fn export_query(&self, dir: &Path, query: &QueryDefinition) -> QueryOutcome {
        let start = Instant::now();
        tracing::debug!(query = %query.name, jql = %query.jql, "executing query");

        let result = self.run_query(dir, query);
        let elapsed = start.elapsed();

        match &result {
            Ok(exported) => tracing::debug!(
                query = %query.name,
                elapsed_ms = elapsed.as_millis() as u64,
                exported = exported.exported,
                total = exported.total,
                "query exported"
            ),
            Err(e) => tracing::warn!(query = %query.name, error = %e, "query failed"),
        }

        QueryOutcome {
            query: query.clone(),
            elapsed,
            result,
        }
    }

    fn run_query(
        &self,
        dir: &Path,
        query: &QueryDefinition,
    ) -> std::result::Result<ExportedQuery, ExportError> {
        let (response, retried) = self.fetch(query)?;

        let normalized = normalize_all(&response.issues);
        let exported = normalized.issues.len();
        let degraded = normalized.degraded;
        let artifact = ExportArtifact::new(
            query,
            normalized.issues,
            response.total,
            Local::now().to_rfc3339(),
        );

        let mut json = serde_json::to_string_pretty(&artifact)
            .map_err(|e| ExportError::Serialization(e.to_string()))?;
        json.push('\n');

        let path = dir.join(artifact_file_name(&query.name));
        fs::write(&path, json).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;

        Ok(ExportedQuery {
            path,
            exported,
            total: response.total,
            degraded,
            retried,
        })
    }

    /// Calls the gateway, retrying once with a smaller page on retryable errors.
    fn fetch(
        &self,
        query: &QueryDefinition,
    ) -> std::result::Result<(SearchResponse, bool), ExportError> {
        match self.gateway.search(&self.request(query, self.config.max_results)) {
            Ok(response) => Ok((response, false)),
            Err(e) if e.is_retryable() => {
                tracing::debug!(
                    query = %query.name,
                    error = %e,
                    max_results = self.config.retry_max_results,
                    "retrying with a smaller page"
                );
                let response = self
                    .gateway
                    .search(&self.request(query, self.config.retry_max_results))?;
                Ok((response, true))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn request(&self, query: &QueryDefinition, max_results: u32) -> SearchRequest {
        SearchRequest {
            jql: query.jql.clone(),
            max_results,
            fields: self.config.fields.clone(),
            timeout: self.config.timeout,
        }
    }
}

/// `<name>.json`, with path separators replaced so the file stays in the run directory.
pub fn artifact_file_name(name: &str) -> String {
    format!("{}.json", name.replace(['/', '\\'], "_"))
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
