//! Header command implementation.

use anyhow::{Context, Result};

use boomerang_core::auth_config;

use crate::config::Config;

pub fn run(config: &Config) -> Result<()> {
    let token = config
        .session_store()
        .live_token()
        .context("No JWT present or has expired")?;

    let auth = auth_config();
    println!("{}: {}", auth.header_name, auth.header_value(token.as_str()));

    Ok(())
}
