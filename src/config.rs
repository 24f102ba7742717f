//! Environment-variable configuration for rollupd.
//!
//! Settings are resolved once at startup, before anything else runs, and any
//! failure aborts the node. The mapping from setting to environment key,
//! default and parser is enumerated explicitly below; an empty value counts
//! as unset.

use std::fmt;
use std::{env, str::FromStr};

use tracing::level_filters::LevelFilter;

use crate::error::ConfigError;

/// Port the GraphQL server listens on.
pub const GRAPHQL_PORT_KEY: &str = "ROLLUP_GRAPHQL_PORT";

/// Port the inspect server listens on.
pub const INSPECT_PORT_KEY: &str = "ROLLUP_INSPECT_PORT";

/// Log verbosity level.
pub const LOG_LEVEL_KEY: &str = "ROLLUP_LOG_LEVEL";

/// When set (to anything), log lines carry timestamps.
pub const LOG_TIMESTAMP_KEY: &str = "ROLLUP_LOG_TIMESTAMP";

/// Immutable node settings, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port exported to the GraphQL server child process.
    pub graphql_port: u16,
    /// Port exported to the inspect server child process.
    pub inspect_port: u16,
    /// Logger settings.
    pub log: LogConfig,
}

/// Logger settings.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Minimum level written to the node's streams.
    pub level: LevelFilter,
    /// Whether log lines carry timestamps.
    pub timestamps: bool,
}

impl Config {
    /// Loads every setting from the environment, failing fast on the first
    /// missing or untypeable value.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            graphql_port: setting(GRAPHQL_PORT_KEY, Some("8080"))?,
            inspect_port: setting(INSPECT_PORT_KEY, Some("8081"))?,
            log: LogConfig {
                level: setting(LOG_LEVEL_KEY, Some("info"))?,
                timestamps: flag(LOG_TIMESTAMP_KEY),
            },
        })
    }
}

/// Reads `key` from the environment and parses it into `T`, falling back to
/// `default` when the variable is unset or empty.
///
/// A missing value with no default and a value that fails to parse are both
/// configuration errors naming the offending key.
pub fn setting<T>(key: &str, default: Option<&str>) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = match env::var(key) {
        Ok(value) if !value.is_empty() => value,
        _ => match default {
            Some(default) => default.to_string(),
            None => {
                return Err(ConfigError::Missing {
                    key: key.to_string(),
                });
            }
        },
    };

    match raw.parse() {
        Ok(value) => Ok(value),
        Err(err) => Err(ConfigError::Invalid {
            key: key.to_string(),
            value: raw,
            message: err.to_string(),
        }),
    }
}

/// Presence-style boolean setting: set means `true`, unset means `false`.
pub fn flag(key: &str) -> bool {
    env::var_os(key).is_some()
}
