use std::env;
use std::ffi::OsString;

use rollupd::config::{
    self, Config, GRAPHQL_PORT_KEY, INSPECT_PORT_KEY, LOG_LEVEL_KEY, LOG_TIMESTAMP_KEY,
};
use rollupd::error::ConfigError;
use rollupd::test_utils;
use tracing::level_filters::LevelFilter;

/// Applies the given environment overrides (None unsets), runs `f`, then
/// restores the previous values. Holds the env lock for the whole call.
fn with_env<R>(vars: &[(&str, Option<&str>)], f: impl FnOnce() -> R) -> R {
    let _lock = test_utils::env_lock();

    let saved: Vec<(&str, Option<OsString>)> =
        vars.iter().map(|(key, _)| (*key, env::var_os(key))).collect();

    for (key, value) in vars {
        unsafe {
            match value {
                Some(value) => env::set_var(key, value),
                None => env::remove_var(key),
            }
        }
    }

    let result = f();

    for (key, previous) in saved {
        unsafe {
            match previous {
                Some(value) => env::set_var(key, value),
                None => env::remove_var(key),
            }
        }
    }

    result
}

const ALL_UNSET: [(&str, Option<&str>); 4] = [
    (GRAPHQL_PORT_KEY, None),
    (INSPECT_PORT_KEY, None),
    (LOG_LEVEL_KEY, None),
    (LOG_TIMESTAMP_KEY, None),
];

#[test]
fn defaults_apply_when_nothing_is_set() {
    let config = with_env(&ALL_UNSET, || Config::load().unwrap());

    assert_eq!(config.graphql_port, 8080);
    assert_eq!(config.inspect_port, 8081);
    assert_eq!(config.log.level, LevelFilter::INFO);
    assert!(!config.log.timestamps);
}

#[test]
fn explicit_values_override_defaults() {
    let vars = [
        (GRAPHQL_PORT_KEY, Some("9000")),
        (INSPECT_PORT_KEY, Some("9001")),
        (LOG_LEVEL_KEY, Some("debug")),
        (LOG_TIMESTAMP_KEY, Some("1")),
    ];

    let config = with_env(&vars, || Config::load().unwrap());

    assert_eq!(config.graphql_port, 9000);
    assert_eq!(config.inspect_port, 9001);
    assert_eq!(config.log.level, LevelFilter::DEBUG);
    assert!(config.log.timestamps);
}

#[test]
fn empty_value_counts_as_unset() {
    let mut vars = ALL_UNSET;
    vars[0] = (GRAPHQL_PORT_KEY, Some(""));

    let config = with_env(&vars, || Config::load().unwrap());
    assert_eq!(config.graphql_port, 8080);
}

#[test]
fn non_numeric_port_fails_with_a_descriptive_error() {
    let mut vars = ALL_UNSET;
    vars[0] = (GRAPHQL_PORT_KEY, Some("not-a-port"));

    let err = with_env(&vars, || Config::load().unwrap_err());

    assert!(matches!(err, ConfigError::Invalid { ref key, .. } if key == GRAPHQL_PORT_KEY));
    let message = err.to_string();
    assert!(message.contains(GRAPHQL_PORT_KEY));
    assert!(message.contains("not-a-port"));
}

#[test]
fn invalid_log_level_fails_with_a_descriptive_error() {
    let mut vars = ALL_UNSET;
    vars[2] = (LOG_LEVEL_KEY, Some("loud"));

    let err = with_env(&vars, || Config::load().unwrap_err());
    assert!(matches!(err, ConfigError::Invalid { ref key, .. } if key == LOG_LEVEL_KEY));
}

#[test]
fn missing_setting_with_no_default_fails() {
    const KEY: &str = "ROLLUP_TEST_REQUIRED_SETTING";

    let err = with_env(&[(KEY, None)], || {
        config::setting::<u16>(KEY, None).unwrap_err()
    });

    assert!(matches!(err, ConfigError::Missing { ref key } if key == KEY));
    assert!(err.to_string().contains(KEY));
}
