//! The conversion engine: validates the three raw tokens, resolves currencies,
//! fetches a fresh snapshot, and converts through the snapshot base currency.

use std::sync::Arc;

use tracing::debug;

use crate::currency::{normalize, AliasTable, Currency};
use crate::error::{ConvertError, UserError};
use crate::rates::{RateSnapshot, RateSource, SNAPSHOT_BASE};

/// Parses a user-supplied amount. Both `.` and `,` are accepted as the decimal
/// separator.
pub fn parse_amount(raw: &str) -> Result<f64, UserError> {
    raw.trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| UserError::AmountNotANumber)
}

/// Value of one unit of `currency` expressed in the snapshot base currency.
///
/// The snapshot publishes how much of `currency` equals one base unit, so any
/// non-base currency is the reciprocal of its published factor.
fn to_base(snapshot: &RateSnapshot, currency: Currency) -> Result<f64, UserError> {
    if currency == SNAPSHOT_BASE {
        return Ok(1.0);
    }
    match snapshot.rates.get(currency.code()) {
        Some(rate) => Ok(1.0 / rate),
        None => Err(UserError::RateUnavailable),
    }
}

/// Stateless conversion engine; the alias table and rate source are injected
/// once at startup.
pub struct Converter {
    aliases: Arc<AliasTable>,
    rates: Arc<dyn RateSource>,
}

impl Converter {
    pub fn new(aliases: Arc<AliasTable>, rates: Arc<dyn RateSource>) -> Self {
        Self { aliases, rates }
    }

    /// Converts `amount` units of `base` into `quote`.
    ///
    /// All input validation happens before the snapshot is fetched; the fetch
    /// itself is one attempt with no retry.
    pub async fn convert(
        &self,
        base: &str,
        quote: &str,
        amount: &str,
    ) -> Result<f64, ConvertError> {
        if base.trim().is_empty() || quote.trim().is_empty() || amount.trim().is_empty() {
            return Err(UserError::ThreeParamsRequired.into());
        }

        let base_code = self.resolve(base)?;
        let quote_code = self.resolve(quote)?;

        if base_code == quote_code {
            return Err(UserError::SameCurrency.into());
        }

        let amount = parse_amount(amount)?;

        let snapshot = self.rates.fetch().await?;

        // base → snapshot base → quote
        let base_in_base = to_base(&snapshot, base_code)?;
        let quote_in_base = to_base(&snapshot, quote_code)?;
        let result = amount * base_in_base / quote_in_base;

        debug!(
            base = %base_code,
            quote = %quote_code,
            amount,
            result,
            "Converted"
        );

        Ok(result)
    }

    fn resolve(&self, token: &str) -> Result<Currency, UserError> {
        let normalized = normalize(token);
        match self.aliases.resolve(&normalized) {
            Some(currency) => Ok(currency),
            None => Err(UserError::UnknownCurrency(normalized)),
        }
    }
}
