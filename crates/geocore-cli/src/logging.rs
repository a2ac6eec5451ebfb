//! Logging setup for the `geocore` binary.

use tracing_subscriber::filter::EnvFilter;

/// Install a stderr `tracing` subscriber.
///
/// The filter comes from `RUST_LOG`, then `GEOCORE_LOG`, then a default
/// level picked from the number of `-v` flags.
pub fn init_logging(verbosity: u8) {
    let fallback = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("GEOCORE_LOG"))
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // A subscriber may already be installed when running under a test harness
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
