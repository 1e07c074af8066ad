//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{get, login, open, set_cookie, start, status};

/// Terminal shell for the boomerang notebook service.
#[derive(Parser, Debug)]
#[command(name = "boomerang")]
#[command(author, version = env!("BOOMERANG_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Directory holding durable storage and cookies
    #[arg(long, global = true, env = "BOOMERANG_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the shell, consuming the login cookie
    Start(start::StartArgs),

    /// Start the shell and open a view
    Open(open::OpenArgs),

    /// Deposit a cookie, as the external login flow would
    SetCookie(set_cookie::SetCookieArgs),

    /// Store a session from a token
    Login(login::LoginArgs),

    /// Forget the stored session
    Logout,

    /// Report whether the stored session is live
    Status(status::StatusArgs),

    /// Display the stored session
    Whoami,

    /// Print the authorization header for the stored session
    Header,

    /// Authenticated GET against the API
    Get(get::GetArgs),
}
