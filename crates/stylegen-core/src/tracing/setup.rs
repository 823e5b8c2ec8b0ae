//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Target the binary logs under, so the default filter keeps its events.
pub const LOG_TARGET: &str = "stylegen";

const DEFAULT_FILTER: &str = "stylegen=info";

/// Initialize the stylegen tracing/logging system.
///
/// Reads the `STYLEGEN_LOG` environment variable for per-crate log levels,
/// e.g. `STYLEGEN_LOG=stylegen_analysis=debug,stylegen=info`.
/// Falls back to `stylegen=info` if `STYLEGEN_LOG` is not set or is invalid.
///
/// Logs go to stderr so stdout only carries the run summary.
/// Calling this more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("STYLEGEN_LOG").unwrap_or_else(|_| default_filter());

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}

fn default_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}
