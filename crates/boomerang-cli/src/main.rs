//! boomerang - terminal shell for the boomerang notebook service.
//!
//! A thin wrapper over `boomerang-core`: each invocation is one application
//! start, so the `jwt` cookie left by the login flow is consumed on the first
//! command that starts the shell.

mod cli;
mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::Cli;
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    let config = Config::resolve(cli.data_dir)?;
    tracing::debug!(data_dir = %config.data_dir.display(), "Resolved configuration");

    if let Err(err) = commands::handle(cli.command, &config).await {
        output::error(&format!("{:#}", err));
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    // Logs go to stderr so command output stays parseable
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
