//! Diagnostic logging for the `handrank` binary.
//!
//! The engine emits `tracing` events; this module installs the subscriber that
//! prints them. Output goes to stderr so it never mixes with command results.

use tracing_subscriber::EnvFilter;

/// Filter directive to use: `RUST_LOG` when set and non-empty, else the configured level.
pub fn filter_directive(rust_log: Option<String>, configured: &str) -> String {
    rust_log
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| configured.to_string())
}

/// Initialize logging for the application
///
/// An unparsable directive falls back to `warn`. Calling this twice is harmless;
/// the first subscriber stays installed.
pub fn init_logging(configured: &str) {
    let directive = filter_directive(std::env::var("RUST_LOG").ok(), configured);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
