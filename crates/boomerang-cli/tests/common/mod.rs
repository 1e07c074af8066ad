use std::path::Path;
use std::process::{Command, Output};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// 2099-01-01T00:00:00Z
pub const EXP_2099: i64 = 4_070_908_800;

/// 2001-09-09T01:46:40Z
pub const EXP_PAST: i64 = 1_000_000_000;

/// Build an unsigned claims token for `username` expiring at `exp`.
pub fn make_token(username: &str, exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let claims = format!(r#"{{"user_id":1,"username":"{}","exp":{}}}"#, username, exp);
    let payload = URL_SAFE_NO_PAD.encode(claims);
    format!("{}.{}.c2lnbmF0dXJl", header, payload)
}

/// Run the CLI with an isolated data directory.
pub fn run_cli(args: &[&str], data_dir: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_boomerang"));
    cmd.args(args);
    cmd.env("BOOMERANG_DATA_DIR", data_dir);
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("RUST_LOG");
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
pub fn run_cli_success(args: &[&str], data_dir: &Path) -> String {
    let output = run_cli(args, data_dir);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI and expect failure, returning stderr.
pub fn run_cli_failure(args: &[&str], data_dir: &Path) -> String {
    let output = run_cli(args, data_dir);
    if output.status.success() {
        panic!("CLI command should have failed: {:?}", args);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}
