//! Integration tests for [`converter::Converter`] against a fixed rate
//! snapshot. The snapshot matches the upstream shape (factors relative to
//! RUB); a call-counting source asserts that validation happens before any
//! fetch.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use converter::{
    AliasTable, ConvertError, Converter, RateError, RateSnapshot, RateSource, UserError,
};

/// Rate source that serves a fixed snapshot and counts fetches.
struct FixedRateSource {
    rates: HashMap<String, f64>,
    fetches: AtomicUsize,
}

impl FixedRateSource {
    fn new(pairs: &[(&str, f64)]) -> Arc<Self> {
        Arc::new(Self {
            rates: pairs.iter().map(|(code, rate)| (code.to_string(), *rate)).collect(),
            fetches: AtomicUsize::new(0),
        })
    }

    fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RateSource for FixedRateSource {
    async fn fetch(&self) -> Result<RateSnapshot, RateError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(RateSnapshot {
            rates: self.rates.clone(),
        })
    }
}

/// Snapshot used across tests: 1 RUB = 0.0109 USD = 0.0101 EUR.
fn cbr_like_source() -> Arc<FixedRateSource> {
    FixedRateSource::new(&[("USD", 0.0109), ("EUR", 0.0101)])
}

fn converter(source: Arc<FixedRateSource>) -> Converter {
    Converter::new(Arc::new(AliasTable::new()), source)
}

/// **Test: usd → eur through the RUB base.**
///
/// **Setup:** snapshot {"USD": 0.0109, "EUR": 0.0101}.
/// **Action:** convert("usd", "eur", "10").
/// **Expected:** 10 * (1/0.0109) / (1/0.0101) ≈ 9.2661.
#[tokio::test]
async fn test_convert_usd_to_eur() {
    let result = converter(cbr_like_source())
        .convert("usd", "eur", "10")
        .await
        .unwrap();

    assert!((result - 9.266055045871559).abs() < 1e-9);
    assert_eq!(format!("{result:.4}"), "9.2661");
}

/// **Test: converting from the snapshot base uses factor 1.0.**
///
/// **Setup:** same snapshot.
/// **Action:** convert("rub", "usd", "100").
/// **Expected:** 100 * 1.0 / (1/0.0109) = 1.09.
#[tokio::test]
async fn test_convert_rub_to_usd() {
    let result = converter(cbr_like_source())
        .convert("rub", "usd", "100")
        .await
        .unwrap();

    assert!((result - 1.09).abs() < 1e-9);
}

/// **Test: inverse-rate consistency.**
///
/// For every distinct pair, convert(base, quote, amount) equals
/// amount / convert(quote, base, 1) against the same snapshot.
#[tokio::test]
async fn test_inverse_rate_consistency() {
    let conv = converter(cbr_like_source());
    let pairs = [
        ("usd", "eur"),
        ("usd", "rub"),
        ("eur", "rub"),
        ("eur", "usd"),
        ("rub", "usd"),
        ("rub", "eur"),
    ];

    for (base, quote) in pairs {
        let forward = conv.convert(base, quote, "10").await.unwrap();
        let unit_back = conv.convert(quote, base, "1").await.unwrap();
        assert!(
            (forward - 10.0 / unit_back).abs() < 1e-9,
            "pair {base}/{quote}: {forward} vs {}",
            10.0 / unit_back
        );
    }
}

/// **Test: self-conversion always fails, for every alias spelling.**
#[tokio::test]
async fn test_self_conversion_rejected_for_all_spellings() {
    let conv = converter(cbr_like_source());
    let spellings = [
        ("usd", "usd"),
        ("usd", " USD "),
        ("доллар", "долларов"),
        ("eur", "ЕВРО"),
        ("rub", "рублей"),
        ("руб", "рубли"),
    ];

    for (base, quote) in spellings {
        let err = conv.convert(base, quote, "10").await.unwrap_err();
        assert!(
            matches!(err, ConvertError::User(UserError::SameCurrency)),
            "pair {base}/{quote} returned {err:?}"
        );
    }
}

/// **Test: unknown currency names the normalized token.**
#[tokio::test]
async fn test_unknown_currency() {
    let err = converter(cbr_like_source())
        .convert(" BTC ", "usd", "1")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ConvertError::User(UserError::UnknownCurrency(ref token)) if token == "btc"
    ));
    assert_eq!(err.to_string(), "Неизвестная валюта: btc");
}

/// **Test: empty tokens are rejected with the three-parameter error.**
#[tokio::test]
async fn test_empty_tokens_rejected() {
    let conv = converter(cbr_like_source());
    for (base, quote, amount) in [("", "usd", "1"), ("usd", " ", "1"), ("usd", "eur", "")] {
        let err = conv.convert(base, quote, amount).await.unwrap_err();
        assert!(matches!(
            err,
            ConvertError::User(UserError::ThreeParamsRequired)
        ));
    }
}

/// **Test: non-numeric amount is rejected.**
#[tokio::test]
async fn test_non_numeric_amount_rejected() {
    let err = converter(cbr_like_source())
        .convert("usd", "eur", "abc")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ConvertError::User(UserError::AmountNotANumber)
    ));
}

/// **Test: a code missing from the snapshot fails with the rate-unavailable
/// error (after exactly one fetch).**
#[tokio::test]
async fn test_rate_missing_from_snapshot() {
    let source = FixedRateSource::new(&[("USD", 0.0109)]);
    let conv = converter(source.clone());

    let err = conv.convert("eur", "usd", "10").await.unwrap_err();

    assert!(matches!(
        err,
        ConvertError::User(UserError::RateUnavailable)
    ));
    assert_eq!(source.fetch_count(), 1);
}

/// **Test: invalid input never reaches the network.**
///
/// **Setup:** counting source.
/// **Action:** self-conversion, unknown currency, bad amount, empty token.
/// **Expected:** fetch count stays 0.
#[tokio::test]
async fn test_validation_happens_before_fetch() {
    let source = cbr_like_source();
    let conv = converter(source.clone());

    assert!(conv.convert("usd", "usd", "10").await.is_err());
    assert!(conv.convert("btc", "usd", "10").await.is_err());
    assert!(conv.convert("usd", "eur", "abc").await.is_err());
    assert!(conv.convert("", "eur", "1").await.is_err());

    assert_eq!(source.fetch_count(), 0);
}

/// **Test: every successful conversion fetches a fresh snapshot (no caching).**
#[tokio::test]
async fn test_snapshot_fetched_per_request() {
    let source = cbr_like_source();
    let conv = converter(source.clone());

    conv.convert("usd", "eur", "1").await.unwrap();
    conv.convert("eur", "rub", "2,5").await.unwrap();

    assert_eq!(source.fetch_count(), 2);
}
