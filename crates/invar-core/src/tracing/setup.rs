//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Invar tracing/logging system.
///
/// Reads `INVAR_LOG` for per-subsystem log levels, e.g.
/// `INVAR_LOG=invar_analysis::binary=trace,invar_core=warn`.
/// Falls back to `invar=info` if `INVAR_LOG` is not set or is invalid.
///
/// Idempotent: later calls are no-ops.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("INVAR_LOG")
            .unwrap_or_else(|_| EnvFilter::new("invar=info"));

        // A host process may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
