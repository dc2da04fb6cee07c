//! Help handler: replies to /start and /help with static usage text.

use async_trait::async_trait;
use kursbot_core::{Handler, HandlerResponse, Message, Result};

/// Usage text sent for /start and /help.
pub fn help_text() -> String {
    [
        "Отправьте: <валюта_из> <валюта_в> <количество>",
        "Пример: доллар евро 10",
        "Команды: /start /help /values",
    ]
    .join("\n")
}

/// Replies with usage text when the message is /start or /help.
pub struct HelpHandler;

impl HelpHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HelpHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Handler for HelpHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        match message.content.trim() {
            "/start" | "/help" => Ok(HandlerResponse::Reply(help_text())),
            _ => Ok(HandlerResponse::Continue),
        }
    }
}
