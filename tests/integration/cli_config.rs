use predicates::prelude::*;

use crate::common::TestEnv;

#[test]
fn config_show_defaults() {
    let env = TestEnv::new();

    env.cmd()
        .env_remove("XXG_MANAGER")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Manager:       npm"))
        .stdout(predicate::str::contains("Ping timeout:  5s"))
        .stdout(predicate::str::contains("xxg-registries.json"));
}

#[test]
fn config_set_manager() {
    let env = TestEnv::new();

    env.cmd()
        .args(["config", "set", "manager", "pnpm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set manager = pnpm"));

    env.cmd()
        .args(["config", "get", "manager"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pnpm"));

    assert!(env.home.path().join("xxg-config.toml").exists());
}

#[test]
fn configured_manager_is_used() {
    let env = TestEnv::new();
    let npm = env.npm_path();

    env.cmd()
        .env_remove("XXG_MANAGER")
        .args(["config", "set", "manager"])
        .arg(&npm)
        .assert()
        .success();

    env.cmd()
        .env_remove("XXG_MANAGER")
        .args(["use", "yarn"])
        .assert()
        .success();

    assert_eq!(
        env.global_registry().as_deref(),
        Some("https://registry.yarnpkg.com/")
    );
}

#[test]
fn config_set_ping_timeout() {
    let env = TestEnv::new();

    env.cmd()
        .args(["config", "set", "ping_timeout_secs", "9"])
        .assert()
        .success();

    env.cmd()
        .args(["config", "get", "ping_timeout_secs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("9"));
}

#[test]
fn config_set_invalid_key() {
    let env = TestEnv::new();

    env.cmd()
        .args(["config", "set", "nonexistent_key", "value"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown config key"));
}

#[test]
fn config_set_invalid_value() {
    let env = TestEnv::new();

    env.cmd()
        .args(["config", "set", "ping_timeout_secs", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid ping_timeout_secs"));

    env.cmd()
        .args(["config", "set", "ping_timeout_secs", "0"])
        .assert()
        .failure();
}
