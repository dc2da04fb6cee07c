//! Component factory: builds the bot, rate source, converter, and router chain
//! from config. Isolates assembly from the runner.

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use converter::{AliasTable, CbrRateSource, Converter};
use kursbot_core::{Bot, TelegramBot};

use crate::chain::HandlerChain;
use crate::config::BotConfig;
use crate::handlers::{ConvertHandler, HelpHandler, ValuesHandler};

/// Core dependencies for run_bot; produced by the component factory.
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    pub bot: Arc<dyn Bot>,
    pub chain: HandlerChain,
}

/// Builds BotComponents from config.
pub fn build_components(config: &BotConfig) -> Result<BotComponents> {
    let teloxide_bot = {
        let bot = teloxide::Bot::new(config.bot_token.clone());
        match config.telegram_api_url {
            Some(ref url) => bot.set_api_url(reqwest::Url::parse(url)?),
            None => bot,
        }
    };
    let bot: Arc<dyn Bot> = Arc::new(TelegramBot::from_teloxide(teloxide_bot.clone()));

    let rates = Arc::new(CbrRateSource::new(
        config.rates_url.clone(),
        config.rates_timeout(),
    )?);
    info!(
        rates_url = %config.rates_url,
        timeout_secs = config.rates_timeout_secs,
        "Using CBR rate source"
    );

    let aliases = Arc::new(AliasTable::new());
    let converter = Arc::new(Converter::new(aliases.clone(), rates));
    let chain = build_chain(aliases, converter);

    Ok(BotComponents {
        teloxide_bot,
        bot,
        chain,
    })
}

/// Builds the router chain: help, values, then the terminal convert handler.
pub fn build_chain(aliases: Arc<AliasTable>, converter: Arc<Converter>) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(HelpHandler::new()))
        .add_handler(Arc::new(ValuesHandler::new(aliases)))
        .add_handler(Arc::new(ConvertHandler::new(converter)))
}
