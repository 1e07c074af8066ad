//! Start command implementation.

use anyhow::{Context, Result};
use clap::Args;

use boomerang_core::storage::parse_cookie_header;

use crate::config::Config;

#[derive(Args, Debug)]
pub struct StartArgs {
    /// Cookie header delivered with the page, e.g. "jwt=eyJ..."
    #[arg(long)]
    pub cookie: Option<String>,
}

pub fn run(args: StartArgs, config: &Config) -> Result<()> {
    if let Some(ref header) = args.cookie {
        let jar = config.cookie_jar();
        for (name, value) in parse_cookie_header(header) {
            jar.set(&name, &value)
                .with_context(|| format!("Failed to store cookie '{}'", name))?;
        }
    }

    let shell = super::start_shell(config)?;
    println!("{}", shell.render());

    Ok(())
}
