use std::fs;

use predicates::prelude::*;

use crate::common::TestEnv;

#[test]
fn add_appends_entry() {
    let env = TestEnv::new();

    env.cmd()
        .args(["add", "corp", "https://npm.corp.example/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added registry 'corp'"));

    assert_eq!(
        env.stored_names(),
        ["npm", "yarn", "cnpm", "taobao", "npmMirror", "corp"]
    );
    env.cmd()
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("https://npm.corp.example/"));
}

#[test]
fn add_duplicate_fails_without_writing() {
    let env = TestEnv::new();
    env.cmd().arg("init").assert().success();
    let before = fs::read(env.registry_file()).unwrap();

    env.cmd()
        .args(["add", "npm", "https://other.example/"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fs::read(env.registry_file()).unwrap(), before);
}

#[test]
fn add_rejects_relative_url() {
    let env = TestEnv::new();

    env.cmd()
        .args(["add", "corp", "npm.corp.example"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid registry url"));

    assert!(!env.stored_names().contains(&"corp".to_string()));
}

#[test]
fn add_refuses_corrupt_list() {
    let env = TestEnv::new();
    fs::write(env.registry_file(), "not json").unwrap();

    env.cmd()
        .args(["add", "corp", "https://npm.corp.example/"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupt"));

    assert_eq!(fs::read_to_string(env.registry_file()).unwrap(), "not json");
}

#[test]
fn add_then_del_restores_file() {
    let env = TestEnv::new();
    env.cmd().arg("init").assert().success();
    let before = fs::read(env.registry_file()).unwrap();

    env.cmd()
        .args(["add", "corp", "https://npm.corp.example/"])
        .assert()
        .success();
    env.cmd()
        .args(["del", "corp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted registry 'corp'"));

    assert_eq!(fs::read(env.registry_file()).unwrap(), before);
}

#[test]
fn del_unknown_fails_without_writing() {
    let env = TestEnv::new();
    env.cmd().arg("init").assert().success();
    let before = fs::read(env.registry_file()).unwrap();

    env.cmd()
        .args(["del", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("registry 'nope' not found"));

    assert_eq!(fs::read(env.registry_file()).unwrap(), before);
}

#[test]
fn rm_alias_removes_entry() {
    let env = TestEnv::new();

    env.cmd().args(["rm", "cnpm"]).assert().success();

    assert_eq!(env.stored_names(), ["npm", "yarn", "taobao", "npmMirror"]);
}
