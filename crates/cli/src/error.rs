// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use jex_core::GatewayError;

/// Errors surfaced by the `jex` commands.
///
/// Messages carry a hint where the fix is usually a setting.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{name} not set\n  hint: export {name} or add it to a .env file")]
    MissingCredential { name: &'static str },

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] jex_core::Error),

    #[error("jira request failed: {0}")]
    Gateway(#[from] GatewayError),

    #[error("filter {id} does not contain a JQL query")]
    FilterWithoutJql { id: u64 },

    #[error("no queries found in {path}\n  hint: add a 'queries' list or pass --jql")]
    NoQueries { path: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
