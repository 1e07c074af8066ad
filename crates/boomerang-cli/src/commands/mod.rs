//! Subcommand implementations.

pub mod get;
mod header;
pub mod login;
mod logout;
pub mod open;
pub mod set_cookie;
pub mod start;
pub mod status;
mod whoami;

use std::sync::Arc;

use anyhow::{Context, Result};

use boomerang_core::{FileCookieJar, FileStorage, Shell};

use crate::cli::Commands;
use crate::config::Config;
use crate::output;

pub async fn handle(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Start(args) => start::run(args, config),
        Commands::Open(args) => open::run(args, config),
        Commands::SetCookie(args) => set_cookie::run(args, config),
        Commands::Login(args) => login::run(args, config),
        Commands::Logout => logout::run(config),
        Commands::Status(args) => status::run(args, config),
        Commands::Whoami => whoami::run(config),
        Commands::Header => header::run(config),
        Commands::Get(args) => get::run(args, config).await,
    }
}

/// Start the shell once, surfacing a rejected cookie as a notice.
pub(crate) fn start_shell(config: &Config) -> Result<Shell<FileStorage, FileCookieJar>> {
    let store = Arc::new(config.session_store());
    let shell = Shell::start(store)
        .context("Failed to start shell")?
        .with_version(env!("BOOMERANG_VERSION"));

    if let Some(notice) = shell.notice() {
        output::notice(&notice.message);
    }

    Ok(shell)
}
