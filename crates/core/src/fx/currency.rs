//! Currency codes and display symbols.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::fx_errors::FxError;

/// Known display symbols, keyed by ISO 4217 code.
const CURRENCY_SYMBOLS: &[(&str, &str)] = &[
    ("INR", "₹"),
    ("USD", "$"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("JPY", "¥"),
];

/// Normalizes a currency code to its canonical upper-case form.
///
/// Returns `UnsupportedCurrency` unless the trimmed input is exactly three
/// ASCII letters.
pub fn normalize_currency_code(code: &str) -> Result<String, FxError> {
    let trimmed = code.trim();
    if trimmed.len() == 3 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(trimmed.to_ascii_uppercase())
    } else {
        Err(FxError::UnsupportedCurrency(code.to_string()))
    }
}

/// Looks up the display symbol for a normalized currency code.
pub fn currency_symbol(code: &str) -> Option<&'static str> {
    CURRENCY_SYMBOLS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, symbol)| *symbol)
}

/// A display currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency {
    code: String,
}

impl Currency {
    pub fn new(code: &str) -> Result<Self, FxError> {
        Ok(Self {
            code: normalize_currency_code(code)?,
        })
    }

    pub fn inr() -> Self {
        Self {
            code: "INR".to_string(),
        }
    }

    pub fn usd() -> Self {
        Self {
            code: "USD".to_string(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// The prefix written before the number when the symbol is shown.
    ///
    /// Currencies without a known symbol fall back to their code followed by a
    /// no-break space, e.g. `CHF\u{a0}10.00`.
    pub fn prefix(&self) -> String {
        match currency_symbol(&self.code) {
            Some(symbol) => symbol.to_string(),
            None => format!("{}\u{a0}", self.code),
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::inr()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl TryFrom<String> for Currency {
    type Error = FxError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Currency::new(&value)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_currency_code() {
        assert_eq!(normalize_currency_code("inr").unwrap(), "INR");
        assert_eq!(normalize_currency_code(" usd ").unwrap(), "USD");
        assert!(matches!(
            normalize_currency_code("RUPEE"),
            Err(FxError::UnsupportedCurrency(_))
        ));
        assert!(normalize_currency_code("U$D").is_err());
        assert!(normalize_currency_code("").is_err());
    }

    #[test]
    fn test_known_symbol_prefix() {
        assert_eq!(Currency::inr().prefix(), "₹");
        assert_eq!(Currency::new("gbp").unwrap().prefix(), "£");
    }

    #[test]
    fn test_unknown_currency_uses_code_prefix() {
        let chf = Currency::new("CHF").unwrap();
        assert_eq!(chf.prefix(), "CHF\u{a0}");
        assert_eq!(chf.to_string(), "CHF");
    }

    #[test]
    fn test_currency_serde_round_trip_rejects_bad_codes() {
        let parsed: Currency = serde_json::from_str("\"eur\"").unwrap();
        assert_eq!(parsed.code(), "EUR");
        assert!(serde_json::from_str::<Currency>("\"euros\"").is_err());
    }
}
