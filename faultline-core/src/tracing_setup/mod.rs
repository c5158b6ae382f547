//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Faultline tracing/logging system.
///
/// Reads the `FAULTLINE_LOG` environment variable for per-subsystem log
/// levels, e.g. `FAULTLINE_LOG=faultline_analysis=debug,faultline_cli=info`.
/// Falls back to `default_directive` when `FAULTLINE_LOG` is not set or is
/// invalid.
///
/// Diagnostics go to stderr: stdout is the report channel for the CLI.
///
/// This function is idempotent; calling it multiple times is safe.
pub fn init_tracing(default_directive: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("FAULTLINE_LOG")
            .unwrap_or_else(|_| EnvFilter::new(default_directive));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
