//! Long-polling runner: converts each teloxide message to a core message, runs
//! the router chain, and sends exactly one reply per handled message.

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info};

use kursbot_core::{Bot as CoreBot, HandlerResponse, Message as CoreMessage, ToCoreMessage};

use super::adapters::TelegramMessageWrapper;
use crate::chain::HandlerChain;

/// Runs the chain for one message and sends the reply.
///
/// Unexpected handler failures are reported to the chat as
/// `Ошибка: <kind>: <text>`; a send failure is returned to the caller.
/// Callable from tests with a mock bot.
pub async fn dispatch(
    bot: &dyn CoreBot,
    chain: &HandlerChain,
    message: &CoreMessage,
) -> kursbot_core::Result<()> {
    match chain.handle(message).await {
        Ok(HandlerResponse::Reply(text)) => bot.reply_to(message, &text).await,
        Ok(HandlerResponse::Continue) => Ok(()),
        Err(e) => {
            error!(error = %e, user_id = message.user.id, "Handler chain failed");
            bot.reply_to(message, &format!("Ошибка: {}", e)).await
        }
    }
}

/// Starts the teloxide REPL. Each text message is handled to completion before
/// the next one; non-text messages are logged and ignored.
pub async fn run_repl(
    teloxide_bot: Bot,
    bot: Arc<dyn CoreBot>,
    chain: HandlerChain,
) -> Result<()> {
    teloxide::repl(
        teloxide_bot,
        move |_bot: Bot, msg: teloxide::types::Message| {
            let bot = bot.clone();
            let chain = chain.clone();

            async move {
                if msg.text().is_none() {
                    info!(chat_id = msg.chat.id.0, "Received non-text message, ignored");
                    return Ok(());
                }

                let core_msg = TelegramMessageWrapper(&msg).to_core();
                info!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    message_content = %core_msg.content,
                    "Received message"
                );

                if let Err(e) = dispatch(bot.as_ref(), &chain, &core_msg).await {
                    error!(error = %e, chat_id = core_msg.chat.id, "Failed to send reply");
                }

                Ok(())
            }
        },
    )
    .await;

    Ok(())
}
