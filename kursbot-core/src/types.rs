//! Core types: user, chat, message, handler response, and the Handler trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Chat (private or group) identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// A single incoming text message with its user and originating chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
}

/// Handler result for the chain. `Reply(text)` carries the response body and
/// ends the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to the next handler.
    Continue,
    /// Stop the chain and send the reply text.
    Reply(String),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// A single router step. The chain runs handlers in order until one replies.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Processes the message. Return `Reply` to end the chain, `Continue` to
    /// pass to the next handler.
    async fn handle(&self, message: &Message) -> crate::error::Result<HandlerResponse>;
}
