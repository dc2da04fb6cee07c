//! # kursbot-core
//!
//! Transport-agnostic bot core: message types, the [`Handler`] trait, the
//! [`Bot`] send abstraction with its teloxide implementation, the error type,
//! and tracing setup.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{Bot, TelegramBot};
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use types::{Chat, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User};
