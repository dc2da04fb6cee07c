//! # Handler chain
//!
//! Runs handlers in order; the first one that returns Reply ends the chain.

use kursbot_core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Ordered chain of handlers; the first Reply wins.
#[derive(Clone)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Appends a handler.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Runs handlers in order until one replies. Returns Continue if none did.
    #[instrument(skip(self, message))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        for handler in &self.handlers {
            let name = std::any::type_name_of_val(handler.as_ref());
            let response = handler.handle(message).await?;
            debug!(handler = %name, response = ?response, "Handler processed");

            if let HandlerResponse::Reply(_) = response {
                info!(
                    user_id = message.user.id,
                    chat_id = message.chat.id,
                    handler = %name,
                    "Handler replied, chain stopped"
                );
                return Ok(response);
            }
        }

        Ok(HandlerResponse::Continue)
    }
}

// Unit/integration tests live in tests/chain_test.rs
