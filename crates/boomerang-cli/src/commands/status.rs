//! Status command implementation.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;

use crate::config::Config;
use crate::output;

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct Status {
    logged_in: bool,
    username: Option<String>,
    expires_at: Option<DateTime<Utc>>,
}

pub fn run(args: StatusArgs, config: &Config) -> Result<()> {
    let store = config.session_store();
    let session = store.session().context("Failed to read session")?;

    let status = Status {
        logged_in: store.is_logged_in(),
        username: session.map(|s| s.username),
        expires_at: store.token_expires_at(),
    };

    if args.json {
        return output::json(&status);
    }

    output::field("Logged in", if status.logged_in { "yes" } else { "no" });
    if let Some(ref username) = status.username {
        output::field("Username", username);
    }
    if let Some(expires_at) = status.expires_at {
        output::field("Expires", &expires_at.to_rfc3339());
    }

    Ok(())
}
