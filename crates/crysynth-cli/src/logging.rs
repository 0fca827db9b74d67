//! Diagnostic logging setup.
//!
//! Library crates emit `tracing` events; the binary installs a `fmt`
//! subscriber writing to stderr so stdout stays clean for reports and JSON.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset and `-v` was not given.
pub const DEFAULT_FILTER: &str = "warn";

/// Filter used with `-v`.
pub const VERBOSE_FILTER: &str = "debug";

/// Builds the event filter. `-v` wins over `RUST_LOG`.
pub fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Installs the global subscriber. Call once, at startup.
pub fn init(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
