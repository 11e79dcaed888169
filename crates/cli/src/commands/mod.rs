// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod export;
pub mod filters;
pub mod search;
pub mod user;

use jex_core::QueryCatalog;

use crate::config::Settings;
use crate::time_phase;

/// Loads the query catalog, falling back to an empty one.
///
/// A missing or unparsable file is logged as a warning by the catalog.
pub(crate) fn load_catalog(settings: &Settings) -> QueryCatalog {
    let (catalog, _error) = time_phase!(
        "catalog::load",
        QueryCatalog::load_or_empty(&settings.queries_path)
    );
    catalog
}
