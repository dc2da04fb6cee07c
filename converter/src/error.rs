//! Two error tiers: user-input errors, reported to the chat verbatim, and
//! rate-source failures, reported with their kind name.

use crate::rates::RateError;
use thiserror::Error;

/// Errors caused by user input; the Display text is sent back to the chat as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    #[error("Нужно три параметра: <валюта_из> <валюта_в> <количество>")]
    ThreeParamsRequired,

    #[error("Неизвестная валюта: {0}")]
    UnknownCurrency(String),

    #[error("Нельзя переводить одинаковые валюты")]
    SameCurrency,

    #[error("Количество должно быть числом")]
    AmountNotANumber,

    #[error("Не удалось получить курс")]
    RateUnavailable,
}

/// Conversion failure: either a user-input error or a rate-source failure.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    User(#[from] UserError),

    #[error("{0}")]
    Rate(#[from] RateError),
}

impl ConvertError {
    /// Short kind name used when reporting unexpected failures to the chat.
    pub fn kind(&self) -> &'static str {
        match self {
            ConvertError::User(_) => "UserError",
            ConvertError::Rate(_) => "RateError",
        }
    }
}
