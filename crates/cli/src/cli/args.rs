// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Argument groups flattened into subcommands.

use std::path::PathBuf;

use clap::Args;

use super::SearchPreset;

/// Which JQL a search runs: a named query, custom JQL, a saved filter or a
/// preset. With none of them, the first catalog entry.
#[derive(Args, Clone, Debug, Default)]
pub struct QuerySelectArgs {
    /// Name of a query from the query file
    #[arg(long, short = 'q', value_name = "NAME",
          conflicts_with_all = ["jql", "filter", "preset"])]
    pub query: Option<String>,

    /// Custom JQL to run instead of a named query
    #[arg(long, short = 'j', value_name = "JQL", conflicts_with_all = ["filter", "preset"])]
    pub jql: Option<String>,

    /// Id of a saved Jira filter whose JQL to run
    #[arg(long, short = 'f', value_name = "ID", conflicts_with = "preset")]
    pub filter: Option<u64>,

    /// Built-in query for the authenticated user
    #[arg(long, short = 'p', value_enum)]
    pub preset: Option<SearchPreset>,
}

/// Overrides for an export run.
#[derive(Args, Clone, Debug, Default)]
pub struct ExportArgs {
    /// Directory the dated export folder is created in [env: JEX_EXPORT_ROOT]
    #[arg(long, value_name = "DIR")]
    pub export_root: Option<PathBuf>,

    /// Issues requested per query
    #[arg(long, value_name = "N", default_value_t = jex_core::export::DEFAULT_MAX_RESULTS,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub max_results: u32,

    /// Seconds to wait for each Jira request [env: JEX_TIMEOUT_SECS]
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}
