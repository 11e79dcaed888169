// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime settings.
//!
//! [`Settings`] is resolved once at startup from command-line flags, the
//! process environment and an optional `.env` file, then passed down to the
//! commands explicitly:
//!
//! | Setting        | Flag            | Variable           | Default                             |
//! |----------------|-----------------|--------------------|-------------------------------------|
//! | `base_url`     |                 | `JIRA_BASE_URL`    | `https://jira.example.com`          |
//! | `api_token`    |                 | `JIRA_API_TOKEN`   | required for commands that hit Jira |
//! | `email`        |                 | `JIRA_EMAIL`       | none (Bearer auth)                  |
//! | `queries_path` | `--queries`     | `JEX_QUERIES`      | `exports/queries/jira_queries.yaml` |
//! | `export_root`  | `--export-root` | `JEX_EXPORT_ROOT`  | `jira_exports`                      |
//! | `timeout`      | `--timeout`     | `JEX_TIMEOUT_SECS` | 60 seconds                          |

use std::path::PathBuf;
use std::time::Duration;

use jex_core::export::{DEFAULT_EXPORT_ROOT, DEFAULT_TIMEOUT};
use jex_core::ExportConfig;

use crate::env::{self, vars};
use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://jira.example.com";
pub const DEFAULT_QUERIES_PATH: &str = "exports/queries/jira_queries.yaml";

/// Values given on the command line; they take precedence over the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub queries: Option<PathBuf>,
    pub export_root: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
}

/// Resolved runtime settings.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub api_token: Option<String>,
    pub email: Option<String>,
    pub queries_path: PathBuf,
    pub export_root: PathBuf,
    pub timeout: Duration,
}

impl Settings {
    /// Resolves settings from the process environment.
    pub fn from_env(overrides: Overrides) -> Result<Self> {
        Self::resolve(overrides, env::non_empty)
    }

    /// Resolves settings using `lookup` for environment values.
    ///
    /// `lookup` returns `None` for unset (or blank) variables.
    pub fn resolve<F>(overrides: Overrides, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(vars::JIRA_BASE_URL)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout = match overrides.timeout_secs {
            Some(secs) => timeout_from_secs(secs, "--timeout")?,
            None => match lookup(vars::JEX_TIMEOUT_SECS) {
                Some(raw) => parse_timeout(&raw)?,
                None => DEFAULT_TIMEOUT,
            },
        };

        Ok(Settings {
            base_url,
            api_token: lookup(vars::JIRA_API_TOKEN),
            email: lookup(vars::JIRA_EMAIL),
            queries_path: overrides
                .queries
                .or_else(|| lookup(vars::JEX_QUERIES).map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_QUERIES_PATH)),
            export_root: overrides
                .export_root
                .or_else(|| lookup(vars::JEX_EXPORT_ROOT).map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_ROOT)),
            timeout,
        })
    }

    /// The API token, or [`Error::MissingCredential`] when unset.
    pub fn require_token(&self) -> Result<&str> {
        self.api_token
            .as_deref()
            .ok_or(Error::MissingCredential {
                name: vars::JIRA_API_TOKEN,
            })
    }

    /// First four characters of the token followed by `...`.
    pub fn masked_token(&self) -> String {
        match &self.api_token {
            Some(token) => format!("{}...", token.chars().take(4).collect::<String>()),
            None => "Not set".to_string(),
        }
    }

    /// Export settings derived from these settings.
    pub fn export_config(&self) -> ExportConfig {
        ExportConfig {
            timeout: self.timeout,
            ..ExportConfig::new(self.export_root.clone())
        }
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("base_url", &self.base_url)
            .field("api_token", &self.api_token.as_ref().map(|_| self.masked_token()))
            .field("email", &self.email)
            .field("queries_path", &self.queries_path)
            .field("export_root", &self.export_root)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    let secs = raw.trim().parse::<u64>().map_err(|_| {
        Error::Config(format!(
            "invalid {}: '{raw}' is not a whole number of seconds",
            vars::JEX_TIMEOUT_SECS
        ))
    })?;
    timeout_from_secs(secs, vars::JEX_TIMEOUT_SECS)
}

fn timeout_from_secs(secs: u64, source: &str) -> Result<Duration> {
    if secs == 0 {
        return Err(Error::Config(format!("{source} must be at least 1 second")));
    }
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
