//! # Telegram game backend
//!
//! Bridges the Telegram Bot API's long-poll update loop with an HTTP server
//! that launches a web-based game. Loads config from `config.yaml` with an
//! env fallback, optionally runs the command listener, and serves the
//! liveness, redirect, and game-send routes.

pub mod cli;
pub mod config;
pub mod core;
pub mod http;
pub mod runner;
pub mod telegram;

pub use cli::Cli;
pub use config::{Config, DEFAULT_CONFIG_PATH, DEFAULT_GAME_URL, DEFAULT_PORT};
pub use core::{init_tracing, BackendError, Result};
pub use http::{build_router, AppState, LIVENESS_TEXT};
pub use runner::run_app;
pub use telegram::{init_bot, Command, GameSender, TelegramGameSender};
