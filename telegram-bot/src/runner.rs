//! Entry sequencing: validate config, init logging, build components, run the REPL.

use anyhow::Result;
use tracing::{info, instrument};

use kursbot_core::init_tracing;

use crate::components::build_components;
use crate::config::BotConfig;
use crate::telegram::run_repl;

/// Main entry: validates config, initializes logging, builds components, then
/// runs the long-polling REPL until the process is stopped.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;

    if let Some(dir) = std::path::Path::new(&config.log_file).parent() {
        std::fs::create_dir_all(dir)?;
    }
    init_tracing(&config.log_file)?;

    let components = build_components(&config)?;

    info!(rates_url = %config.rates_url, "Bot started successfully");

    run_repl(components.teloxide_bot, components.bot, components.chain).await
}
