//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Build the filter used by [`init_logging`].
///
/// `RUST_LOG` wins when set; otherwise the configured level applies, raised
/// to `debug` when `verbose` is set.
pub fn build_env_filter(config: &LoggingConfig, verbose: bool) -> EnvFilter {
    let fallback = if verbose {
        "debug"
    } else {
        config.level.as_str()
    };

    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a global fmt subscriber.
///
/// Returns `false` if a subscriber was already installed (e.g. by the
/// embedding application or another test).
pub fn init_logging(config: &LoggingConfig, verbose: bool) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(config, verbose))
        .try_init()
        .is_ok()
}
