//! Open command implementation.

use anyhow::{Result, bail};
use clap::Args;

use crate::config::Config;

#[derive(Args, Debug)]
pub struct OpenArgs {
    /// Path to navigate to (/notebooks or /tasks)
    pub path: String,
}

pub fn run(args: OpenArgs, config: &Config) -> Result<()> {
    let mut shell = super::start_shell(config)?;

    if shell.navigate(&args.path).is_none() {
        bail!("No route matches '{}'", args.path);
    }

    println!("{}", shell.render());
    Ok(())
}
