//! Command-line interface for the backend binary.

use std::path::PathBuf;

use clap::Parser;

use crate::config::DEFAULT_CONFIG_PATH;

/// Telegram game backend: update listener plus HTTP launch routes.
#[derive(Parser, Debug)]
#[command(name = "telegame-backend", about = "Telegram game backend")]
pub struct Cli {
    /// Path to the YAML configuration file.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}
