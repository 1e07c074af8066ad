//! Whoami command implementation.

use anyhow::{Context, Result};

use crate::config::Config;
use crate::output;

pub fn run(config: &Config) -> Result<()> {
    let session = config
        .session_store()
        .session()
        .context("Failed to read session")?
        .context("No stored session. Run 'boomerang start' after signing in.")?;

    output::field("Username", &session.username);

    Ok(())
}
