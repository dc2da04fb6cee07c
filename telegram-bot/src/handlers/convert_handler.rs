//! Conversion handler: terminal chain step. Parses `<base> <quote> <amount>`
//! from the message text and replies with the converted amount or the
//! user-facing failure text.

use async_trait::async_trait;
use std::sync::Arc;

use converter::{ConvertError, Converter, UserError};
use kursbot_core::{BotError, Handler, HandlerResponse, Message, Result};

/// Terminal handler: every message that is not a command is a conversion
/// request, answered with exactly one reply.
pub struct ConvertHandler {
    converter: Arc<Converter>,
}

impl ConvertHandler {
    pub fn new(converter: Arc<Converter>) -> Self {
        Self { converter }
    }

    /// Builds the reply text. User-input failures become `Ошибка: <text>`
    /// replies; rate-source failures escalate to the dispatch boundary.
    async fn convert_reply(&self, text: &str) -> Result<String> {
        let parts: Vec<&str> = text.split_whitespace().collect();
        if parts.len() != 3 {
            return Ok(format!("Ошибка: {}", UserError::ThreeParamsRequired));
        }
        let (base, quote, amount) = (parts[0], parts[1], parts[2]);

        match self.converter.convert(base, quote, amount).await {
            Ok(result) => Ok(format!("{} {} → {}: {:.4}", amount, base, quote, result)),
            Err(ConvertError::User(e)) => Ok(format!("Ошибка: {}", e)),
            Err(e) => Err(BotError::Handler(format!("{}: {}", e.kind(), e))),
        }
    }
}

#[async_trait]
impl Handler for ConvertHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let reply = self.convert_reply(&message.content).await?;
        Ok(HandlerResponse::Reply(reply))
    }
}
