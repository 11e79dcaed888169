// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use jex_core::{ExportReport, Exporter, QueryCatalog, SearchGateway};

use crate::cli::ExportArgs;
use crate::client::JiraClient;
use crate::config::Settings;
use crate::display::{connection_banner, format_elapsed, format_export_summary, format_exported};
use crate::error::{Error, Result};
use crate::time_phase;

use super::load_catalog;

pub fn run(settings: &Settings, names: Vec<String>, args: ExportArgs) -> Result<()> {
    let client = JiraClient::new(settings)?;
    let catalog = load_catalog(settings);

    let mut config = settings.export_config();
    config.max_results = args.max_results;
    config.retry_max_results = config.retry_max_results.min(args.max_results);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", connection_banner(settings))?;

    let exporter = Exporter::new(client, config);
    run_impl(&exporter, settings, &catalog, &names, &mut out).map(|_| ())
}

/// Internal implementation that accepts an exporter and writer for testing.
pub(crate) fn run_impl<G: SearchGateway, W: Write>(
    exporter: &Exporter<G>,
    settings: &Settings,
    catalog: &QueryCatalog,
    names: &[String],
    out: &mut W,
) -> Result<ExportReport> {
    if catalog.is_empty() {
        return Err(Error::NoQueries {
            path: settings.queries_path.display().to_string(),
        });
    }

    let targets = (!names.is_empty()).then_some(names);
    let mut write_error: Option<io::Error> = None;

    let report = time_phase!(
        "export::all",
        exporter.export_all(catalog, targets, |outcome| {
            let line = match &outcome.result {
                Ok(exported) => format_exported(&outcome.query.name, exported, outcome.elapsed),
                Err(e) => format!(
                    "Failed {} after {}: {}",
                    outcome.query.name,
                    format_elapsed(outcome.elapsed),
                    e
                ),
            };
            if let Err(e) = writeln!(out, "{line}") {
                write_error.get_or_insert(e);
            }
        })
    )?;

    if let Some(e) = write_error {
        return Err(e.into());
    }

    for name in &report.unknown {
        writeln!(out, "Skipped {name}: not in {}", settings.queries_path.display())?;
    }
    writeln!(
        out,
        "\n{}",
        format_export_summary(report.written().len(), report.outcomes.len(), &report.dir)
    )?;
    Ok(report)
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
