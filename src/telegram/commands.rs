//! Command dispatch: `/start`, `/game`, and the unknown-command fallback.

use std::sync::Arc;

use teloxide::dispatching::{DefaultKey, UpdateFilterExt};
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use teloxide::utils::command::BotCommands;
use tracing::{error, info, warn};

use crate::config::Config;

pub const WELCOME_TEXT: &str = "Welcome to the Telegram game bot!";
pub const GAME_TEXT: &str = "Ready to play? Press the button below!";
pub const UNKNOWN_COMMAND_TEXT: &str = "Unknown command";
pub const PLAY_BUTTON_TEXT: &str = "Play now";

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "show the welcome message.")]
    Start,
    #[command(description = "get a link to the game.")]
    Game,
}

/// Picks the reply for a recognized command.
///
/// `/game` carries an inline keyboard with a single URL button. When the
/// configured game URL does not parse the button is omitted and the text
/// still goes out (the URL is never validated at load time).
pub fn command_reply(cmd: &Command, game_url: &str) -> (String, Option<InlineKeyboardMarkup>) {
    match cmd {
        Command::Start => (WELCOME_TEXT.to_string(), None),
        Command::Game => {
            let keyboard = match reqwest::Url::parse(game_url) {
                Ok(url) => Some(InlineKeyboardMarkup::new([[InlineKeyboardButton::url(
                    PLAY_BUTTON_TEXT,
                    url,
                )]])),
                Err(e) => {
                    warn!(error = %e, game_url, "Game URL does not parse, replying without button");
                    None
                }
            };
            (GAME_TEXT.to_string(), keyboard)
        }
    }
}

/// Sends the fixed reply for a recognized command. Send failures are logged,
/// never retried.
async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    config: Arc<Config>,
) -> ResponseResult<()> {
    info!(chat_id = msg.chat.id.0, command = ?cmd, "Received command");

    let (text, keyboard) = command_reply(&cmd, &config.game_url);
    let mut request = bot.send_message(msg.chat.id, text);
    if let Some(keyboard) = keyboard {
        request = request.reply_markup(keyboard);
    }
    if let Err(e) = request.await {
        error!(error = %e, chat_id = msg.chat.id.0, "Failed to send command reply");
    }

    Ok(())
}

/// Fallback for messages that did not parse as a known command. Only slash
/// messages get the unknown-command reply; plain text is ignored.
async fn handle_unrecognized(bot: Bot, msg: Message) -> ResponseResult<()> {
    if msg.text().is_some_and(|t| t.starts_with('/')) {
        info!(chat_id = msg.chat.id.0, "Received unknown command");
        if let Err(e) = bot.send_message(msg.chat.id, UNKNOWN_COMMAND_TEXT).await {
            error!(error = %e, chat_id = msg.chat.id.0, "Failed to send unknown-command reply");
        }
    }
    Ok(())
}

/// Builds the update dispatcher with the command branch and the fallback.
pub fn build_dispatcher(
    bot: Bot,
    config: Arc<Config>,
) -> Dispatcher<Bot, teloxide::RequestError, DefaultKey> {
    let handler = Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(handle_command),
        )
        .branch(dptree::entry().endpoint(handle_unrecognized));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![config])
        .build()
}
