// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use crate::client::{FilterSource, JiraClient};
use crate::config::Settings;
use crate::display::{connection_banner, format_filter_list};
use crate::error::Result;
use crate::time_phase;

pub fn run(settings: &Settings) -> Result<()> {
    let client = JiraClient::new(settings)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", connection_banner(settings))?;
    run_impl(&client, &mut out)
}

/// Internal implementation that accepts a filter source and writer for testing.
pub(crate) fn run_impl<L: FilterSource, W: Write>(filters: &L, out: &mut W) -> Result<()> {
    let favourites = time_phase!("jira::filters", filters.favourite_filters())?;
    write!(out, "{}", format_filter_list(&favourites))?;
    Ok(())
}

#[cfg(test)]
#[path = "filters_tests.rs"]
mod tests;
