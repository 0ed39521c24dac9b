// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Default filter when neither `--log` nor `--debug` is given.
pub const DEFAULT_FILTER: &str = "warn";

/// Filter directive selected by the command-line flags.
pub fn filter_directive(log: Option<&str>, debug: bool) -> String {
    match (log, debug) {
        (Some(directive), _) if !directive.trim().is_empty() => directive.to_string(),
        (_, true) => "debug".to_string(),
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// Install a stderr fmt subscriber. Later calls are ignored.
pub fn init(log: Option<&str>, debug: bool) {
    let directive = filter_directive(log, debug);
    let filter =
        EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
