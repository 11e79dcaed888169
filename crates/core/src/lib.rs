// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! jex-core: the JQL export pipeline.
//!
//! This crate loads named JQL queries, runs them through a
//! [`SearchGateway`], normalizes the raw Jira issues into a flat schema and
//! writes one dated artifact per query. It knows nothing about HTTP or the
//! command line; the `jex` CLI supplies a real gateway.

pub mod artifact;
pub mod catalog;
pub mod error;
pub mod export;
pub mod gateway;
pub mod normalize;
pub mod path;

pub use artifact::{Comment, ExportArtifact, ExportMetadata, NormalizedIssue};
pub use catalog::{QueryCatalog, QueryDefinition, Selection};
pub use error::{Error, Result};
pub use export::{ExportConfig, ExportError, ExportReport, ExportedQuery, Exporter, QueryOutcome};
pub use gateway::{GatewayError, SearchGateway, SearchRequest, SearchResponse};
pub use normalize::{normalize, normalize_all, try_normalize, NormalizeError, NormalizeOutcome};
