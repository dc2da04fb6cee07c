//! Currency codes and the alias table.
//!
//! Three canonical codes (USD, EUR, RUB); every spelling a user may send,
//! including Russian inflected forms, maps to one of them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Canonical currency code. Listing order is fixed: USD, EUR, RUB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    Usd,
    Eur,
    Rub,
}

impl Currency {
    /// All supported currencies, in listing order.
    pub const ALL: [Currency; 3] = [Currency::Usd, Currency::Eur, Currency::Rub];

    /// The canonical 3-letter code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Rub => "RUB",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Known spellings and their canonical codes, in listing order.
const ALIASES: &[(&str, Currency)] = &[
    ("usd", Currency::Usd),
    ("доллар", Currency::Usd),
    ("доллара", Currency::Usd),
    ("долларов", Currency::Usd),
    ("eur", Currency::Eur),
    ("евро", Currency::Eur),
    ("rub", Currency::Rub),
    ("руб", Currency::Rub),
    ("рубль", Currency::Rub),
    ("рубля", Currency::Rub),
    ("рублей", Currency::Rub),
    ("рубли", Currency::Rub),
];

/// Normalizes a user-supplied currency token: trim, then lowercase.
pub fn normalize(token: &str) -> String {
    token.trim().to_lowercase()
}

/// Read-only alias lookup, built once at startup and shared by reference.
#[derive(Debug, Clone)]
pub struct AliasTable {
    map: HashMap<&'static str, Currency>,
}

impl AliasTable {
    /// Builds the table from the static alias list.
    pub fn new() -> Self {
        Self {
            map: ALIASES.iter().copied().collect(),
        }
    }

    /// Resolves a raw token to its canonical currency, if known.
    pub fn resolve(&self, token: &str) -> Option<Currency> {
        self.map.get(normalize(token).as_str()).copied()
    }

    /// Aliases of one currency, in listing order.
    pub fn aliases(&self, currency: Currency) -> Vec<&'static str> {
        ALIASES
            .iter()
            .filter(|(_, c)| *c == currency)
            .map(|(alias, _)| *alias)
            .collect()
    }

    /// Number of known aliases.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::new()
    }
}
