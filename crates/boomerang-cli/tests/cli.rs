//! CLI tests against file-backed storage in a temporary data directory.
//!
//! Each test gets its own data dir, so cookies and sessions never leak
//! between tests or into the user's real data directory.

mod common;

use std::fs;

use tempfile::TempDir;

use common::{EXP_2099, EXP_PAST, make_token, run_cli, run_cli_failure, run_cli_success};

fn storage_json(dir: &TempDir) -> serde_json::Value {
    let path = dir.path().join("storage.json");
    if !path.exists() {
        return serde_json::json!({});
    }
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn cookies_json(dir: &TempDir) -> serde_json::Value {
    let path = dir.path().join("cookies.json");
    if !path.exists() {
        return serde_json::json!({});
    }
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_start_without_cookie() {
    let dir = TempDir::new().unwrap();

    let stdout = run_cli_success(&["start"], dir.path());

    assert!(stdout.starts_with("Boomerang "));
    assert!(stdout.contains("  Notebooks (/notebooks)"));
    assert!(stdout.contains("  Tasks (/tasks)"));
    assert!(stdout.contains("navbar"));
    assert!(!stdout.contains("logged in"));
    assert_eq!(storage_json(&dir), serde_json::json!({}));
}

#[test]
fn test_start_consumes_cookie_for_bob() {
    let dir = TempDir::new().unwrap();
    let token = make_token("bob", EXP_2099);
    let cookie = format!("jwt={}", token);

    let stdout = run_cli_success(&["start", "--cookie", &cookie], dir.path());

    assert!(stdout.contains("logged in"));
    let storage = storage_json(&dir);
    assert_eq!(storage["username"], "bob");
    assert_eq!(storage["token"], token.as_str());
    assert!(cookies_json(&dir).get("jwt").is_none());

    let status = run_cli_success(&["status", "--json"], dir.path());
    let status: serde_json::Value = serde_json::from_str(status.trim()).unwrap();
    assert_eq!(status["logged_in"], true);
    assert_eq!(status["username"], "bob");
    assert_eq!(status["expires_at"], "2099-01-01T00:00:00Z");
}

#[test]
fn test_set_cookie_then_start() {
    let dir = TempDir::new().unwrap();
    let token = make_token("alice", EXP_2099);

    run_cli_success(&["set-cookie", "jwt", &token], dir.path());
    assert_eq!(cookies_json(&dir)["jwt"], token.as_str());

    let stdout = run_cli_success(&["open", "/notebooks"], dir.path());

    assert!(stdout.contains("* Notebooks (/notebooks)"));
    assert!(stdout.contains("logged in"));
    assert!(stdout.trim_end().ends_with("[notebooks]"));
    assert!(cookies_json(&dir).get("jwt").is_none());
}

#[test]
fn test_start_with_bad_cookie_continues() {
    let dir = TempDir::new().unwrap();

    let output = run_cli(&["start", "--cookie", "jwt=garbage"], dir.path());

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("Could not sign you in"));
    assert!(stderr.contains("Could not sign you in"));
    assert!(!stdout.contains("logged in"));
    assert!(cookies_json(&dir).get("jwt").is_none());
    assert_eq!(storage_json(&dir), serde_json::json!({}));
}

#[test]
fn test_open_unknown_route_fails() {
    let dir = TempDir::new().unwrap();

    let stderr = run_cli_failure(&["open", "/settings"], dir.path());

    assert!(stderr.contains("No route matches '/settings'"));
}

#[test]
fn test_login_expired_token_is_stale() {
    let dir = TempDir::new().unwrap();
    let token = make_token("alice", EXP_PAST);

    let output = run_cli(&["login", &token], dir.path());
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("already expired"));

    let status = run_cli_success(&["status", "--json"], dir.path());
    let status: serde_json::Value = serde_json::from_str(status.trim()).unwrap();
    assert_eq!(status["logged_in"], false);
    assert_eq!(status["username"], "alice");

    let stderr = run_cli_failure(&["header"], dir.path());
    assert!(stderr.contains("No JWT present or has expired"));
}

#[test]
fn test_login_rejects_malformed_token() {
    let dir = TempDir::new().unwrap();

    let stderr = run_cli_failure(&["login", "a.b"], dir.path());

    assert!(stderr.contains("Failed to login"));
    assert_eq!(storage_json(&dir), serde_json::json!({}));
}

#[test]
fn test_header_and_logout() {
    let dir = TempDir::new().unwrap();
    let token = make_token("alice", EXP_2099);
    run_cli_success(&["login", &token], dir.path());

    let header = run_cli_success(&["header"], dir.path());
    assert_eq!(header.trim(), format!("Authorization: JWT {}", token));

    let whoami = run_cli_success(&["whoami"], dir.path());
    assert!(whoami.contains("alice"));

    run_cli_success(&["logout"], dir.path());
    run_cli_success(&["logout"], dir.path());

    assert_eq!(storage_json(&dir), serde_json::json!({}));
    let stderr = run_cli_failure(&["whoami"], dir.path());
    assert!(stderr.contains("No stored session"));
}

#[test]
fn test_get_requires_live_session() {
    let dir = TempDir::new().unwrap();

    let stderr = run_cli_failure(
        &["get", "notebooks/", "--api", "http://127.0.0.1:9"],
        dir.path(),
    );

    assert!(stderr.contains("no JWT present or has expired"));
}
