// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.
//!
//! `RUST_LOG` takes precedence. Without it, only warnings are shown, or
//! everything down to `debug` with `--debug` / `JEX_DEBUG=1`.

use tracing_subscriber::EnvFilter;

/// The filter used when `RUST_LOG` is unset.
pub fn default_directive(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "warn"
    }
}

/// Whether debug logging was asked for by flag or by `JEX_DEBUG=1`.
pub fn debug_requested(flag: bool) -> bool {
    flag || crate::env::jex_debug()
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
