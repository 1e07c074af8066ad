//! Set-cookie command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::config::Config;
use crate::output;

#[derive(Args, Debug)]
pub struct SetCookieArgs {
    /// Cookie name
    pub name: String,

    /// Cookie value
    pub value: String,
}

pub fn run(args: SetCookieArgs, config: &Config) -> Result<()> {
    config
        .cookie_jar()
        .set(&args.name, &args.value)
        .context("Failed to store cookie")?;

    output::success(&format!("Cookie '{}' set", args.name));
    Ok(())
}
