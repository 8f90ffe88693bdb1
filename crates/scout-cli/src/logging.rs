//! Tracing initialization for the CLI.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::types::LogLevel;

static INIT: Once = Once::new();

/// Install the global subscriber, writing to stderr.
///
/// `SCOUT_LOG` takes precedence over `level` and accepts the usual
/// `EnvFilter` syntax, e.g. `SCOUT_LOG=scout_runtime=debug,warn`.
///
/// Only the first call has any effect.
pub fn init(level: LogLevel) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("SCOUT_LOG")
            .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .try_init();
    });
}
