//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::config::Config;
use crate::output;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Claims token issued by the service
    pub token: String,
}

pub fn run(args: LoginArgs, config: &Config) -> Result<()> {
    let store = config.session_store();
    let session = store.login(&args.token).context("Failed to login")?;

    output::success("Logged in successfully");
    println!();
    output::field("Username", &session.username);
    if !store.is_logged_in() {
        output::notice("Token has already expired");
    }

    Ok(())
}
