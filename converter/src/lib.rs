//! # converter
//!
//! Conversion engine for the currency bot: currency codes and the alias table,
//! amount parsing, rate snapshots fetched from cbr-xml-daily, and the
//! cross-rate computation through the snapshot base currency.

pub mod currency;
pub mod engine;
pub mod error;
pub mod rates;

pub use currency::{AliasTable, Currency};
pub use engine::{parse_amount, Converter};
pub use error::{ConvertError, UserError};
pub use rates::{CbrRateSource, RateError, RateSnapshot, RateSource, CBR_URL, SNAPSHOT_BASE};
