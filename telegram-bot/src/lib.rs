//! # Telegram currency bot application
//!
//! Wires the conversion engine into a Telegram bot: env config, clap CLI, the
//! router handler chain (help / values / convert), teloxide adapters, and the
//! long-polling runner.

pub mod chain;
pub mod cli;
pub mod components;
pub mod config;
pub mod handlers;
pub mod runner;
pub mod telegram;

pub use chain::HandlerChain;
pub use cli::{load_config, Cli, Commands};
pub use components::{build_chain, build_components, BotComponents};
pub use config::BotConfig;
pub use handlers::{help_text, values_text, ConvertHandler, HelpHandler, ValuesHandler};
pub use runner::run_bot;
pub use telegram::{dispatch, run_repl, TelegramMessageWrapper, TelegramUserWrapper};
