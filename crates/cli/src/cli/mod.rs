// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::{ExportArgs, QuerySelectArgs};

/// How search results are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SearchFormat {
    /// One line per issue with its two most recent comments
    #[default]
    Summary,
    /// Markdown-style table rows
    Table,
    /// Normalized issues as JSON
    Json,
}

/// Built-in searches that need no query file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SearchPreset {
    /// Everything assigned to me, most recently updated first
    Mine,
    /// My issues whose status category is not Done, oldest first
    Unresolved,
}

impl SearchPreset {
    pub fn jql(self) -> &'static str {
        match self {
            SearchPreset::Mine => "assignee = currentUser() ORDER BY updated DESC",
            SearchPreset::Unresolved => {
                "assignee = currentUser() AND statusCategory != Done ORDER BY created ASC"
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SearchPreset::Mine => "mine",
            SearchPreset::Unresolved => "unresolved",
        }
    }
}

#[derive(Parser)]
#[command(name = "jex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Run named JQL queries against Jira and export the results")]
#[command(
    long_about = "Run named JQL queries against Jira and export the results.\n\n\
    Queries are read from a YAML (or TOML) file. Credentials come from \
    JIRA_BASE_URL, JIRA_API_TOKEN and JIRA_EMAIL, or a .env file."
)]
pub struct Cli {
    /// Query file to read [env: JEX_QUERIES] [default: exports/queries/jira_queries.yaml]
    #[arg(long, global = true, value_name = "PATH")]
    pub queries: Option<PathBuf>,

    /// Log debug details to stderr (same as JEX_DEBUG=1)
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search Jira with a named query, custom JQL, a saved filter or a preset
    #[command(after_help = "\
Examples:
  jex search                         Run the first query in the query file
  jex search -q mine                 Run the query named 'mine'
  jex search -j 'project = OPS' -l 5 Run custom JQL, show 5 issues
  jex search --filter 10000          Run the JQL of saved filter 10000
  jex search --preset unresolved     My issues that are not done
  jex search --list-queries          Show the available queries
  jex search -q mine --format json   Print normalized issues as JSON")]
    Search {
        #[command(flatten)]
        select: QuerySelectArgs,

        /// Maximum number of issues to show
        #[arg(long, short = 'l', default_value_t = 10,
              value_parser = clap::value_parser!(u32).range(1..))]
        limit: u32,

        /// List available queries and exit
        #[arg(long, conflicts_with_all = ["query", "jql", "filter", "preset"])]
        list_queries: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = SearchFormat::Summary)]
        format: SearchFormat,
    },

    /// Export queries into dated JSON files
    #[command(after_help = "\
Examples:
  jex export                         Export every query in the query file
  jex export mine recent             Export only 'mine' and 'recent'
  jex export --export-root out       Write under out/YYYY-MM-DD/")]
    Export {
        /// Query names to export (default: all)
        names: Vec<String>,

        #[command(flatten)]
        args: ExportArgs,
    },

    /// List your favourite saved filters
    Filters,

    /// Show the user the configured credentials belong to
    User,

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  jex completion bash > ~/.local/share/bash-completion/completions/jex
  jex completion zsh > ~/.zfunc/_jex
  jex completion fish > ~/.config/fish/completions/jex.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
