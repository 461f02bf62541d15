//! Binary for the Telegram game backend.

use anyhow::Result;
use clap::Parser;
use telegame_backend::{init_tracing, run_app, Cli, Config};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing()?;

    let config = Config::load(&cli.config);
    run_app(config).await
}
