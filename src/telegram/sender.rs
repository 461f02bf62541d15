//! Game send seam between the HTTP trigger route and the Telegram client.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ChatId;

use crate::core::{BackendError, Result};

/// Sends the configured game to a chat. Trait seam so tests can substitute a
/// mock for the real Bot API call.
#[async_trait]
pub trait GameSender: Send + Sync {
    async fn send_game(&self, chat_id: i64) -> Result<()>;
}

/// [`GameSender`] backed by a teloxide [`Bot`] and the configured short name.
pub struct TelegramGameSender {
    bot: Bot,
    game_short_name: String,
}

impl TelegramGameSender {
    pub fn new(bot: Bot, game_short_name: String) -> Self {
        Self {
            bot,
            game_short_name,
        }
    }
}

#[async_trait]
impl GameSender for TelegramGameSender {
    async fn send_game(&self, chat_id: i64) -> Result<()> {
        self.bot
            .send_game(ChatId(chat_id), self.game_short_name.clone())
            .await
            .map_err(|e| BackendError::Bot(e.to_string()))?;
        Ok(())
    }
}
