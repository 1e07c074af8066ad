//! Get command implementation.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;

use boomerang_core::{ApiUrl, AuthHttp};

use crate::config::Config;
use crate::output;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Endpoint path relative to the API root, e.g. notebooks/
    pub path: String,

    /// API base URL
    #[arg(long, env = "BOOMERANG_API", default_value = "http://localhost:8000/api")]
    pub api: String,
}

pub async fn run(args: GetArgs, config: &Config) -> Result<()> {
    let api = ApiUrl::new(&args.api).context("Invalid API URL")?;
    let client = AuthHttp::new(api, Arc::new(config.session_store()))
        .context("Failed to build HTTP client")?;

    let body: serde_json::Value = client
        .get_json(&args.path)
        .await
        .with_context(|| format!("GET {} failed", args.path))?;

    output::json_pretty(&body)
}
