// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Phase timings for debugging.
//!
//! Enable with `JEX_TIMINGS=1`. Output goes to stderr as
//! `[timings] phase::name XXms`.

use std::time::Instant;

/// Print a timing result to stderr if `JEX_TIMINGS` is set.
#[inline]
pub fn print_timing(phase: &str, start: Instant) {
    if crate::env::jex_timings() {
        eprintln!("[timings] {} {}ms", phase, start.elapsed().as_millis());
    }
}

/// Times a block of code.
///
/// ```rust,ignore
/// let response = time_phase!("jira::search", gateway.search(&request));
/// ```
#[macro_export]
macro_rules! time_phase {
    ($phase:expr, $block:expr) => {{
        let __start = std::time::Instant::now();
        let __result = $block;
        $crate::timings::print_timing($phase, __start);
        __result
    }};
}
