//! Bot configuration: Telegram connection, rate source, logging. Loaded from env.

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use converter::CBR_URL;

/// Runtime configuration, one field per environment variable.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// RATES_URL; defaults to the cbr-xml-daily endpoint
    pub rates_url: String,
    /// RATES_TIMEOUT_SECS; bounded timeout for every rate fetch
    pub rates_timeout_secs: u64,
    /// LOG_FILE
    pub log_file: String,
}

impl BotConfig {
    /// Loads from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").context("BOT_TOKEN not set")?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let rates_url = env::var("RATES_URL").unwrap_or_else(|_| CBR_URL.to_string());
        let rates_timeout_secs = env::var("RATES_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/kursbot.log".to_string());

        Ok(Self {
            bot_token,
            telegram_api_url,
            rates_url,
            rates_timeout_secs,
            log_file,
        })
    }

    /// The bounded timeout applied to upstream rate requests.
    pub fn rates_timeout(&self) -> Duration {
        Duration::from_secs(self.rates_timeout_secs)
    }

    /// Validates URL-shaped fields.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url) = self.telegram_api_url {
            if reqwest::Url::parse(url).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url
                );
            }
        }
        if reqwest::Url::parse(&self.rates_url).is_err() {
            anyhow::bail!("RATES_URL is not a valid URL: {}", self.rates_url);
        }
        Ok(())
    }
}
