//! Command-line wrapper around the converter
//!
//! Reads exports from files or stdin, writes `Config.json` to stdout or a
//! file, and sets up diagnostics on stderr.

pub mod commands;
pub mod config;
pub mod error;

use tracing_subscriber::EnvFilter;

/// Install a stderr `tracing` subscriber using the given filter directive.
///
/// Falls back to `warn` when the directive does not parse. Safe to call more
/// than once; later calls keep the first subscriber.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        tracing::debug!("Keeping existing tracing subscriber: {}", e);
    }
}
