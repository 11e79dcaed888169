// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! jexrs - the library behind the `jex` CLI.
//!
//! Wires the [`jex_core`] export pipeline to Jira over HTTP and to the
//! terminal.
//!
//! # Main Components
//!
//! - [`Settings`] - runtime configuration from flags, environment and `.env`
//! - [`JiraClient`] - blocking REST client implementing [`jex_core::SearchGateway`]
//! - [`Error`] - error type for every command
//!
//! ```rust,ignore
//! use jexrs::{JiraClient, Overrides, Settings};
//! use jex_core::{ExportConfig, Exporter, QueryCatalog};
//!
//! let settings = Settings::from_env(Overrides::default())?;
//! let catalog = QueryCatalog::load(&settings.queries_path)?;
//! let exporter = Exporter::new(JiraClient::new(&settings)?, settings.export_config());
//! let report = exporter.export_all(&catalog, None, |_| {})?;
//! ```

mod cli;
mod commands;
mod display;
pub mod timings;

pub mod client;
pub mod config;
pub mod env;
pub mod error;
pub mod logging;

pub use cli::{Cli, Command, ExportArgs, QuerySelectArgs, SearchFormat, SearchPreset};
pub use client::{CurrentUser, FilterSource, JiraClient, SavedFilter};
pub use config::{Overrides, Settings};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Runs a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let Cli { queries, command, .. } = cli;

    let mut overrides = Overrides {
        queries,
        ..Overrides::default()
    };
    if let Command::Export { args, .. } = &command {
        overrides.export_root = args.export_root.clone();
        overrides.timeout_secs = args.timeout;
    }

    match command {
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "jex", &mut std::io::stdout());
            Ok(())
        }
        Command::Search {
            select,
            limit,
            list_queries,
            format,
        } => {
            let settings = Settings::from_env(overrides)?;
            commands::search::run(&settings, select, limit, list_queries, format)
        }
        Command::Export { names, args } => {
            let settings = Settings::from_env(overrides)?;
            commands::export::run(&settings, names, args)
        }
        Command::Filters => {
            let settings = Settings::from_env(overrides)?;
            commands::filters::run(&settings)
        }
        Command::User => {
            let settings = Settings::from_env(overrides)?;
            commands::user::run(&settings)
        }
    }
}
