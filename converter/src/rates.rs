//! Rate snapshot and the cbr-xml-daily client.
//!
//! The upstream publishes `rates` relative to RUB: 1 RUB equals `rates[code]`
//! units of `code`. A snapshot lives for a single conversion request.

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::currency::Currency;

/// Default upstream URL (Central Bank of Russia daily rates, JSON).
pub const CBR_URL: &str = "https://www.cbr-xml-daily.ru/latest.js";

/// The currency all snapshot factors are expressed against.
///
/// The upstream's declared base is not validated; if it ever changed, the
/// reciprocal factors computed in [`crate::engine`] would silently be wrong.
pub const SNAPSHOT_BASE: Currency = Currency::Rub;

/// Rates fetched for one conversion request: canonical code to factor relative
/// to [`SNAPSHOT_BASE`]. The base currency itself is absent from the map.
#[derive(Debug, Clone, Deserialize)]
pub struct RateSnapshot {
    pub rates: HashMap<String, f64>,
}

/// Rate-source failure: transport error, non-success status, or malformed body.
#[derive(Error, Debug)]
pub enum RateError {
    #[error("rate request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Source of fresh rate snapshots. Implementations map to an upstream (e.g. CBR).
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Fetches a fresh snapshot. One attempt, no retry.
    async fn fetch(&self) -> Result<RateSnapshot, RateError>;
}

/// cbr-xml-daily backed [`RateSource`] with a bounded request timeout.
#[derive(Debug, Clone)]
pub struct CbrRateSource {
    client: reqwest::Client,
    url: String,
}

impl CbrRateSource {
    /// Creates a source for the given URL with the given request timeout.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, RateError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl RateSource for CbrRateSource {
    async fn fetch(&self) -> Result<RateSnapshot, RateError> {
        let snapshot = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json::<RateSnapshot>()
            .await?;
        debug!(rates = snapshot.rates.len(), "Fetched rate snapshot");
        Ok(snapshot)
    }
}
