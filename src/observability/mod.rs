//! Observability utilities for declarative programs and the builder.
//!
//! Logging goes through `tracing`; this module installs the subscriber and
//! forwards child process output into it.
//!
//! # Example
//!
//! ```no_run
//! use actions_cli::observability::init_logging;
//!
//! // Keep stdout free for action results
//! init_logging("warn");
//! tracing::warn!("visible on stderr");
//! ```

pub mod logger;

use crate::config::EnvironmentLoader;
use tracing_subscriber::EnvFilter;

// Re-export main types for convenience
pub use logger::forward_lines;

/// Filter used when nothing is configured
pub const DEFAULT_FILTER: &str = "warn";

/// Install a stderr `fmt` subscriber with the given filter directive.
///
/// Unparsable directives fall back to [`DEFAULT_FILTER`]. Returns false
/// when a global subscriber was already installed.
pub fn init_logging(directive: &str) -> bool {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}

/// Install the subscriber using `ACTIONS_LOG`, or `default` when unset.
pub fn init_from_env(default: &str) -> bool {
    let directive = EnvironmentLoader::default()
        .log_level()
        .unwrap_or_else(|| default.to_string());
    init_logging(&directive)
}
