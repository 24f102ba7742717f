use assert_cmd::Command;
use predicates::prelude::*;

fn rollupd() -> Command {
    Command::cargo_bin("rollupd").unwrap()
}

#[test]
fn help_mentions_log_level_override() {
    rollupd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--log-level"));
}

#[test]
fn invalid_log_level_argument_is_rejected() {
    rollupd()
        .arg("--log-level")
        .arg("loud")
        .assert()
        .failure()
        .stderr(predicate::str::contains("log-level"));
}

#[test]
fn bad_port_value_fails_before_any_service_starts() {
    rollupd()
        .env("ROLLUP_GRAPHQL_PORT", "not-a-port")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ROLLUP_GRAPHQL_PORT"));
}

#[test]
fn missing_service_binaries_are_fatal() {
    // The auxiliary server binaries are not installed in the test
    // environment, so the node must exit nonzero reporting the first
    // registered service.
    rollupd()
        .env_remove("ROLLUP_GRAPHQL_PORT")
        .env_remove("ROLLUP_INSPECT_PORT")
        .assert()
        .failure()
        .stdout(predicate::str::contains("graphql-server"));
}
