//! Bot abstraction for sending replies.
//!
//! [`Bot`] trait is transport-agnostic; [`TelegramBot`] implements it via teloxide.

use crate::error::{BotError, Result};
use crate::types::{Chat, Message};
use async_trait::async_trait;
use teloxide::{prelude::*, types::ChatId};

/// Abstraction for sending messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
}

/// Teloxide-based implementation of [`Bot`].
#[derive(Clone)]
pub struct TelegramBot {
    bot: teloxide::Bot,
}

impl TelegramBot {
    /// Creates a bot using the given Telegram bot token.
    pub fn new(token: String) -> Self {
        Self {
            bot: teloxide::Bot::new(token),
        }
    }

    /// Creates a bot that talks to a non-default API endpoint (e.g. a local
    /// mock server in integration tests).
    pub fn with_api_url(token: String, api_url: reqwest::Url) -> Self {
        Self {
            bot: teloxide::Bot::new(token).set_api_url(api_url),
        }
    }

    /// Wraps an already-configured teloxide bot.
    pub fn from_teloxide(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Bot for TelegramBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text)
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_telegram_bot_new() {
        let _bot = TelegramBot::new("dummy_token".to_string());
    }

    #[test]
    fn test_telegram_bot_with_api_url() {
        let url = reqwest::Url::parse("http://127.0.0.1:8080").unwrap();
        let _bot = TelegramBot::with_api_url("dummy_token".to_string(), url);
    }
}
