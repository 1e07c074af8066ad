//! Stamps the version shown in the shell title and `--version`.
//!
//! Order of preference: `BOOMERANG_VERSION` from the build environment,
//! `git describe`, then the crate version.

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=BOOMERANG_VERSION");
    println!("cargo:rerun-if-changed=.git/HEAD");

    let version = std::env::var("BOOMERANG_VERSION")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(describe)
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env=BOOMERANG_VERSION={}", version);
}

fn describe() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let described = String::from_utf8(output.stdout).ok()?;
    let described = described.trim();
    if described.is_empty() {
        return None;
    }

    Some(described.trim_start_matches('v').to_string())
}
