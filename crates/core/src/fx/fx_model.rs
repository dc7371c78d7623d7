use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::currency::normalize_currency_code;
use super::fx_errors::FxError;

/// A static conversion rate: one unit of `from_currency` buys `rate` units of
/// `to_currency`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    pub from_currency: String,
    pub to_currency: String,
    pub rate: Decimal,
}

impl ExchangeRate {
    /// Builds a validated rate with normalized currency codes.
    pub fn new(from: &str, to: &str, rate: Decimal) -> Result<Self, FxError> {
        let rate = Self {
            from_currency: normalize_currency_code(from)?,
            to_currency: normalize_currency_code(to)?,
            rate,
        };
        rate.validate()?;
        Ok(rate)
    }

    pub fn validate(&self) -> Result<(), FxError> {
        if self.rate <= Decimal::ZERO {
            return Err(FxError::InvalidRate(format!(
                "{} -> {} rate must be positive, got {}",
                self.from_currency, self.to_currency, self.rate
            )));
        }
        Ok(())
    }

    /// Returns the pair in "FROM/TO" form, e.g. "USD/INR".
    pub fn pair_key(&self) -> String {
        format!("{}/{}", self.from_currency, self.to_currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_normalizes_codes() {
        let rate = ExchangeRate::new("usd", "inr", dec!(75)).unwrap();
        assert_eq!(rate.pair_key(), "USD/INR");
    }

    #[test]
    fn test_non_positive_rate_is_rejected() {
        assert!(matches!(
            ExchangeRate::new("USD", "INR", dec!(0)),
            Err(FxError::InvalidRate(_))
        ));
        assert!(ExchangeRate::new("USD", "INR", dec!(-1)).is_err());
    }

    #[test]
    fn test_deserializes_camel_case() {
        let json = r#"{"fromCurrency":"USD","toCurrency":"INR","rate":75.0}"#;
        let rate: ExchangeRate = serde_json::from_str(json).unwrap();
        assert_eq!(rate.rate, dec!(75));
        assert_eq!(rate.to_currency, "INR");
    }
}
