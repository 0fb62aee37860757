//! logging
//!
//! Diagnostic logging using the `tracing` ecosystem.
//!
//! ```text
//! Verbosity::Quiet  -> error
//! Verbosity::Normal -> warn
//! Verbosity::Debug  -> debug
//! RUST_LOG (if set) -> overrides the above
//! ```
//!
//! Diagnostics go to stderr so they never interleave with shell output on
//! stdout.

use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::ui::output::Verbosity;

/// `EnvFilter` directive for a verbosity level.
pub fn filter_directive(verbosity: Verbosity) -> &'static str {
    match verbosity {
        Verbosity::Quiet => "error",
        Verbosity::Normal => "warn",
        Verbosity::Debug => "debug",
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(verbosity: Verbosity) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbosity)));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbosity == Verbosity::Debug)
        .with_level(true)
        .without_time()
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(console_layer)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_follow_verbosity() {
        assert_eq!(filter_directive(Verbosity::Quiet), "error");
        assert_eq!(filter_directive(Verbosity::Normal), "warn");
        assert_eq!(filter_directive(Verbosity::Debug), "debug");
    }

    #[test]
    fn directives_parse() {
        for verbosity in [Verbosity::Quiet, Verbosity::Normal, Verbosity::Debug] {
            assert!(EnvFilter::try_new(filter_directive(verbosity)).is_ok());
        }
    }
}
