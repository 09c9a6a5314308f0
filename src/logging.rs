//! Diagnostics go to stderr through `tracing`, so they never mix with shell output.

use tracing_subscriber::EnvFilter;

/// Environment variable with an `EnvFilter` directive, e.g. `VSH_LOG=debug`.
pub const LOG_ENV: &str = "VSH_LOG";

/// Default filter for a number of `-v` flags.
pub fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. `VSH_LOG`, when set, wins over `verbosity`.
/// Calling it again is a no-op.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
