//! Tracing setup for test binaries.
//!
//! The library only emits `tracing` events; nothing is printed unless a
//! subscriber is installed. Test suites call [`init_tracing`] to see them.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive, e.g. `filetree=debug`.
pub const LOG_ENV: &str = "FILETREE_LOG";

/// Install a compact fmt subscriber writing to the test output capture.
///
/// Safe to call more than once; only the first call installs anything.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .compact()
        .try_init();
}
