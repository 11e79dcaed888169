// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use jexrs::Cli;

fn main() {
    let cli = Cli::parse();

    let dotenv = jexrs::env::load_dotenv();
    jexrs::logging::init(jexrs::logging::debug_requested(cli.debug));
    match dotenv {
        Ok(Some(path)) => tracing::debug!(path = %path.display(), "loaded .env"),
        Ok(None) => {}
        Err(e) => tracing::warn!(error = %e, "ignoring unreadable .env file"),
    }

    if let Err(e) = jexrs::run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
