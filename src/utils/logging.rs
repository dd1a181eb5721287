//! Diagnostic logging setup
//!
//! Logs go to stderr so they never interleave with the prompt stream on
//! stdout. `RUST_LOG` takes precedence over the `-v` count.

use tracing_subscriber::EnvFilter;

/// Map the `-v` count to a default filter directive
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
