use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Bot error: {0}")]
    Bot(String),

    /// Failure inside a handler; the payload is `<kind>: <detail>` and is
    /// reported back to the chat at the dispatch boundary.
    #[error("{0}")]
    Handler(String),
}

pub type Result<T> = std::result::Result<T, BotError>;
