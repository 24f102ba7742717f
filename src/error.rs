//! Error handling for rollupd.
use std::process::ExitStatus;

use thiserror::Error;

/// Defines all possible errors raised while supervising a service process.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Error launching the service binary (e.g. binary not found).
    #[error("Failed to launch service '{service}': {source}")]
    Launch {
        /// The service name that failed to launch.
        service: String,
        /// The underlying error that occurred.
        #[source]
        source: std::io::Error,
    },

    /// Error waiting on a running service process.
    #[error("Failed to wait on service '{service}': {source}")]
    Wait {
        /// The service name being waited on.
        service: String,
        /// The underlying error that occurred.
        #[source]
        source: std::io::Error,
    },

    /// The service process exited abnormally and not because of a
    /// termination request issued by the supervisor.
    #[error("Service '{service}' exited abnormally: {status}")]
    AbnormalExit {
        /// The service name that exited.
        service: String,
        /// The OS-reported exit status.
        status: ExitStatus,
    },

    /// The tokio task supervising the service failed to complete.
    #[error("Supervision task for service '{service}' failed: {source}")]
    Task {
        /// The service whose task failed.
        service: String,
        /// The underlying join error.
        #[source]
        source: tokio::task::JoinError,
    },
}

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required setting has no value and no default.
    #[error("Missing value for configuration variable '{key}'")]
    Missing {
        /// The environment key that was not set.
        key: String,
    },

    /// A setting was present but could not be converted to its declared type.
    #[error("Invalid value '{value}' for configuration variable '{key}': {message}")]
    Invalid {
        /// The environment key with the bad value.
        key: String,
        /// The raw value read from the environment.
        value: String,
        /// Description of the conversion failure.
        message: String,
    },
}
