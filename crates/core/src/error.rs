// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for jex-core operations.

use std::path::PathBuf;

use thiserror::Error;

/// Run-level errors raised by jex-core.
///
/// Failures scoped to a single query or a single issue are not represented
/// here; see [`ExportError`](crate::ExportError) and
/// [`NormalizeError`](crate::NormalizeError).
#[derive(Debug, Error)]
pub enum Error {
    #[error("query file not found: {}\n  hint: set JEX_QUERIES or pass --queries", path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("failed to parse query file {}: {reason}", path.display())]
    ConfigParseError { path: PathBuf, reason: String },

    #[error("query '{name}' not found\n  hint: run 'jex search --list-queries' to see available queries")]
    QueryNotFound { name: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for jex-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
