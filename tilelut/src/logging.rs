//! Logging bootstrap.
//!
//! Log output goes to stderr so stdout stays clean for the CLI's progress
//! reporting. The filter is taken from `RUST_LOG` when set, defaulting to
//! `info`.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Safe to call more than once; subsequent calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
