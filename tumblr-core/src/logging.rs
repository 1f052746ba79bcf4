//! Structured logging setup using the `tracing` ecosystem.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize a console logger for CLI usage or tests.
///
/// `level` is a log level string ("trace", "debug", "info", "warn",
/// "error") or a full `EnvFilter` directive. Falls back to "info" when the
/// string does not parse. Subsequent calls are no-ops.
pub fn init_console_logging(level: &str) {
    let env_filter = EnvFilter::try_new(level)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .compact(),
        )
        .try_init();
}
