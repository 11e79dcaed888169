// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! Every runtime environment variable the CLI reads is named here. The
//! constants are generated by `build.rs` and live in the [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Loads a `.env` file from the working directory (or a parent), if any.
///
/// Variables already present in the environment win. Returns the loaded
/// path, `None` when there is no file.
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenvy::Error> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Returns `true` if `JEX_TIMINGS` is set (any value).
pub fn jex_timings() -> bool {
    std::env::var(vars::JEX_TIMINGS).is_ok()
}

/// Returns `true` if `JEX_DEBUG=1`.
pub fn jex_debug() -> bool {
    std::env::var(vars::JEX_DEBUG).is_ok_and(|v| v == "1")
}

/// Reads a variable, treating an empty value as unset.
pub fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
