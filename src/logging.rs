//! Logger stream initialization.
//!
//! The subscriber is built once in `main` from the already-loaded
//! configuration rather than from ad-hoc environment reads, so every
//! component simply logs through `tracing` macros afterwards. `RUST_LOG`,
//! when present, still takes precedence over the configured level.

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Installs the process-wide subscriber. Later calls are no-ops.
pub fn init(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    if config.timestamps {
        let _ = subscriber.try_init();
    } else {
        let _ = subscriber.without_time().try_init();
    }
}
