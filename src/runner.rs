//! Lifecycle controller: wires config, bot, and HTTP server; coordinates shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::{info, warn};

use crate::config::Config;
use crate::http::{build_router, AppState};
use crate::telegram::{build_dispatcher, init_bot, run_listener, GameSender, TelegramGameSender};

/// Main entry: authenticates the bot (optional), starts the update listener
/// and the HTTP server as separate tasks, then blocks on SIGINT/SIGTERM and
/// stops both deterministically.
///
/// A bind failure on the HTTP port is the only fatal error once startup
/// reaches this point.
pub async fn run_app(config: Config) -> Result<()> {
    let config = Arc::new(config);

    let bot = init_bot(&config).await;

    let mut listener_task = None;
    let mut listener_shutdown = None;
    if let Some(bot) = bot.clone() {
        let dispatcher = build_dispatcher(bot.clone(), config.clone());
        listener_shutdown = Some(dispatcher.shutdown_token());
        listener_task = Some(tokio::spawn(run_listener(dispatcher, bot)));
        info!("Update listener started");
    }

    let sender: Option<Arc<dyn GameSender>> = match &bot {
        Some(bot) if !config.game_short_name.is_empty() => Some(Arc::new(
            TelegramGameSender::new(bot.clone(), config.game_short_name.clone()),
        )),
        _ => None,
    };
    if sender.is_none() {
        info!("Game send endpoint disabled (bot or game short name not configured)");
    }

    let app = build_router(AppState {
        config: config.clone(),
        sender,
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let tcp = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "HTTP server listening");

    let (server_shutdown, server_shutdown_rx) = oneshot::channel::<()>();
    let server_task = tokio::spawn(async move {
        axum::serve(tcp, app)
            .with_graceful_shutdown(async move {
                let _ = server_shutdown_rx.await;
            })
            .await
    });

    shutdown_signal().await;
    info!("Shutdown signal received, stopping tasks");

    let _ = server_shutdown.send(());
    if let Some(token) = listener_shutdown {
        match token.shutdown() {
            Ok(stopped) => stopped.await,
            Err(e) => warn!(error = %e, "Update listener was not running"),
        }
    }
    if let Some(task) = listener_task {
        let _ = task.await;
    }
    server_task.await.context("HTTP server task panicked")??;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt()).expect("Failed to install SIGINT handler");
    let mut sigterm = signal(SignalKind::terminate()).expect("Failed to install SIGTERM handler");

    tokio::select! {
        _ = sigint.recv() => {}
        _ = sigterm.recv() => {}
    }
}
