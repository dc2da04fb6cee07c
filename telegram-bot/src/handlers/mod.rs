//! Router handlers: help text, alias listing, and the conversion request.

mod convert_handler;
mod help_handler;
mod values_handler;

pub use convert_handler::ConvertHandler;
pub use help_handler::{help_text, HelpHandler};
pub use values_handler::{values_text, ValuesHandler};
