//! Subscriber setup for hosts and tests that want to see scoring events.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_DIRECTIVE: &str = "warn,subsetscan_scoring=info";

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// `default_directive` (or `warn,subsetscan_scoring=info`).
///
/// Returns `false` when a global subscriber was already installed.
pub fn try_init_logging(default_directive: Option<&str>) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive.unwrap_or(DEFAULT_DIRECTIVE)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .try_init()
        .is_ok()
}

pub fn init_logging() {
    if try_init_logging(None) {
        tracing::debug!("logging initialized");
    }
}
