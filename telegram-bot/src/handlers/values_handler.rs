//! Values handler: replies to /values with aliases grouped by currency code.

use async_trait::async_trait;
use std::sync::Arc;

use converter::{AliasTable, Currency};
use kursbot_core::{Handler, HandlerResponse, Message, Result};

/// One line per canonical code in listing order (USD, EUR, RUB), each naming
/// its known aliases.
pub fn values_text(aliases: &AliasTable) -> String {
    Currency::ALL
        .iter()
        .map(|currency| format!("{}: {}", currency.code(), aliases.aliases(*currency).join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Replies with the supported-currencies listing when the message is /values.
pub struct ValuesHandler {
    aliases: Arc<AliasTable>,
}

impl ValuesHandler {
    pub fn new(aliases: Arc<AliasTable>) -> Self {
        Self { aliases }
    }
}

#[async_trait]
impl Handler for ValuesHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.content.trim() == "/values" {
            return Ok(HandlerResponse::Reply(values_text(&self.aliases)));
        }
        Ok(HandlerResponse::Continue)
    }
}
