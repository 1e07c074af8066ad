//! Logout command implementation.

use anyhow::{Context, Result};

use crate::config::Config;
use crate::output;

pub fn run(config: &Config) -> Result<()> {
    config
        .session_store()
        .logout()
        .context("Failed to clear session")?;

    output::success("Logged out");
    Ok(())
}
