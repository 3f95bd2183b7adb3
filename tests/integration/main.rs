//! Integration tests for the ping-on-failure CLI
//!
//! These tests run the binary end to end against a local server standing in
//! for the GitHub GraphQL API and the Discord webhook.

#[path = "../common/mod.rs"]
#[allow(dead_code)]
mod common;

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

use common::fixtures::{check_run, legacy_status, raw_commit};
use common::git_repo::TempGitRepo;
use common::server::FakeServer;

/// Helper function to create a command wired to `server`, isolated from the user's config
fn ping(server: &FakeServer, home: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("ping-on-failure"));
    cmd.env("GITHUB_TOKEN", "test-token")
        .env("DISCORD_WEBHOOK", server.webhook_url())
        .env("GITHUB_GRAPHQL_URL", server.graphql_url())
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG")
        .current_dir(home);
    cmd
}

fn failing_history() -> Vec<Value> {
    vec![
        raw_commit(
            "b2",
            "add feature",
            vec![
                check_run("CI", "lint", "SUCCESS", "http://gh/lint"),
                check_run("CI", "build", "FAILURE", "http://gh/build"),
            ],
        ),
        raw_commit("a1", "fix bug", vec![legacy_status("tvm-ci/branch", "ERROR", "http://ci/a1")]),
    ]
}

fn webhook_contents(server: &FakeServer) -> Vec<String> {
    server
        .requests_to("/webhook")
        .into_iter()
        .map(|r| r.body["content"].as_str().unwrap_or_default().to_string())
        .collect()
}

// =============================================================================
// END-TO-END RUNS
// =============================================================================

#[test]
fn test_e2e_first_run_notifies_and_writes_snapshot() {
    let temp = TempDir::new().unwrap();
    let server = FakeServer::builder().page(failing_history()).start();
    let statuses = temp.path().join("statuses.json");

    ping(&server, temp.path())
        .args(["--statuses", "{}", "--statuses-file"])
        .arg(&statuses)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 new failure(s)"));

    assert_eq!(
        webhook_contents(&server),
        [
            "Job `CI / build` failed on commit `b2`: add feature",
            "Job `tvm-ci/branch` failed on commit `a1`: fix bug",
        ]
    );

    let written: Value = serde_json::from_str(&fs::read_to_string(&statuses).unwrap()).unwrap();
    assert_eq!(written.as_array().unwrap().len(), 2);
    assert_eq!(written[0]["oid"], "b2");
    assert_eq!(written[0]["statuses"][1]["name"], "CI / build");
    assert_eq!(written[1]["statuses"][0]["url"], "http://ci/a1");
}

#[test]
fn test_e2e_second_run_is_quiet() {
    let temp = TempDir::new().unwrap();
    let statuses = temp.path().join("statuses.json");

    let first = FakeServer::builder().page(failing_history()).start();
    ping(&first, temp.path())
        .args(["--statuses", "[]", "--statuses-file"])
        .arg(&statuses)
        .assert()
        .success();
    let before = fs::read_to_string(&statuses).unwrap();

    let second = FakeServer::builder().page(failing_history()).start();
    ping(&second, temp.path())
        .arg("--statuses-file")
        .arg(&statuses)
        .assert()
        .success()
        .stdout(predicate::str::contains("No status changes."));

    assert!(webhook_contents(&second).is_empty());
    assert_eq!(fs::read_to_string(&statuses).unwrap(), before);
}

#[test]
fn test_e2e_default_statuses_file_at_repo_root() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("statuses.json"), "[]").unwrap();
    let server = FakeServer::builder().page(failing_history()).start();

    ping(&server, temp.path()).assert().success();

    let content = fs::read_to_string(temp.path().join("statuses.json")).unwrap();
    assert!(content.contains("\"messageHeadline\": \"add feature\""));
    assert_eq!(webhook_contents(&server).len(), 2);
}

#[test]
fn test_e2e_paginates_with_user_and_repo() {
    let temp = TempDir::new().unwrap();
    let server = FakeServer::builder()
        .page(vec![raw_commit("c3", "three", Vec::new())])
        .page(vec![raw_commit("b2", "two", Vec::new())])
        .start();

    ping(&server, temp.path())
        .args(["--user", "octo", "--repo", "hello", "--statuses", "[]", "--statuses-file"])
        .arg(temp.path().join("statuses.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Checked 2 commit(s) on octo/hello"));

    let requests = server.requests_to("/graphql");
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].body["variables"]["owner"], "octo");
    assert_eq!(requests[0].body["variables"]["name"], "hello");
    assert!(requests[0].body["variables"]["after"].is_null());
    assert_eq!(requests[1].body["variables"]["after"], "c3 cursor");
    assert_eq!(requests[2].body["variables"]["after"], "b2 cursor");
}

#[test]
fn test_e2e_json_output() {
    let temp = TempDir::new().unwrap();
    let server = FakeServer::builder().page(failing_history()).start();

    let output = ping(&server, temp.path())
        .args(["--json", "--statuses", "[]", "--statuses-file"])
        .arg(temp.path().join("statuses.json"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["repository"], "apache/tvm");
    assert_eq!(report["changed"], true);
    assert_eq!(report["notifications"].as_array().unwrap().len(), 2);
}

#[test]
fn test_e2e_push_commits_snapshot() {
    let repo = TempGitRepo::with_remote();
    let home = TempDir::new().unwrap();
    let server = FakeServer::builder().page(failing_history()).start();

    ping(&server, home.path())
        .current_dir(repo.path())
        .args(["--push", "--statuses", "[]"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pushed snapshot."));

    assert_eq!(
        repo.remote_git(&["log", "-1", "--format=%an|%s"]),
        "tvm-bot|Update `statuses.json`"
    );
    assert!(repo.git(&["status", "--porcelain"]).is_empty());
}

// =============================================================================
// FAILURES
// =============================================================================

#[test]
fn test_missing_token_fails() {
    let temp = TempDir::new().unwrap();
    let server = FakeServer::builder().start();

    ping(&server, temp.path())
        .env_remove("GITHUB_TOKEN")
        .args(["--statuses", "[]"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GITHUB_TOKEN is not set"));

    assert!(server.requests_to("/graphql").is_empty());
}

#[test]
fn test_missing_statuses_file_fails_before_fetch() {
    let temp = TempDir::new().unwrap();
    let server = FakeServer::builder().page(failing_history()).start();

    ping(&server, temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("statuses.json"));

    assert!(server.requests_to("/graphql").is_empty());
}

#[test]
fn test_malformed_statuses_override_fails() {
    let temp = TempDir::new().unwrap();
    let server = FakeServer::builder().page(failing_history()).start();

    ping(&server, temp.path())
        .args(["--statuses", "{not json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --statuses JSON"));
}

#[test]
fn test_webhook_rejection_fails_without_writing() {
    let temp = TempDir::new().unwrap();
    let server = FakeServer::builder().page(failing_history()).webhook_status(500).start();
    let statuses = temp.path().join("statuses.json");

    ping(&server, temp.path())
        .args(["--statuses", "[]", "--statuses-file"])
        .arg(&statuses)
        .assert()
        .failure()
        .stderr(predicate::str::contains("webhook rejected message (500)"));

    assert!(!statuses.exists());
}

#[test]
fn test_api_failure_fails() {
    let temp = TempDir::new().unwrap();
    let server = FakeServer::builder()
        .graphql_response(502, serde_json::json!({"message": "Bad gateway"}))
        .start();

    ping(&server, temp.path())
        .args(["--statuses", "[]"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GitHub returned HTTP 502"));
}

#[test]
fn test_help() {
    let temp = TempDir::new().unwrap();
    let server = FakeServer::builder().start();

    ping(&server, temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--statuses"))
        .stdout(predicate::str::contains("--push"));
}
