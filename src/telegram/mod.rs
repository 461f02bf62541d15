//! Telegram integration: bot authentication, command dispatch, game sending.

pub mod commands;
pub mod sender;

use std::time::Duration;

use teloxide::dispatching::DefaultKey;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::update_listeners::Polling;
use tracing::{info, warn};

use crate::config::Config;

pub use commands::{
    build_dispatcher, command_reply, Command, GAME_TEXT, PLAY_BUTTON_TEXT, UNKNOWN_COMMAND_TEXT,
    WELCOME_TEXT,
};
pub use sender::{GameSender, TelegramGameSender};

/// Server-side wait of the long-poll subscription.
const POLL_TIMEOUT: Duration = Duration::from_secs(60);

/// Authenticates against the Bot API with a single `getMe` call.
///
/// Returns `None` when the token is empty or authentication fails; bot
/// features are disabled but the HTTP service runs either way.
pub async fn init_bot(config: &Config) -> Option<Bot> {
    if config.telegram_token.is_empty() {
        info!("TELEGRAM_TOKEN not set, bot functionality disabled");
        return None;
    }

    let bot = Bot::new(config.telegram_token.clone());
    match bot.get_me().await {
        Ok(me) => {
            info!(
                username = me.user.username.as_deref().unwrap_or("unknown"),
                "Authorized bot account"
            );
            Some(bot)
        }
        Err(e) => {
            warn!(error = %e, "Telegram authentication failed, bot functionality disabled");
            None
        }
    }
}

/// Drives the dispatcher over a long-poll update subscription until the
/// dispatcher's shutdown token is triggered or the subscription closes.
pub async fn run_listener(
    mut dispatcher: Dispatcher<Bot, teloxide::RequestError, DefaultKey>,
    bot: Bot,
) {
    let listener = Polling::builder(bot).timeout(POLL_TIMEOUT).build();
    dispatcher
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("Update listener error"),
        )
        .await;
}
