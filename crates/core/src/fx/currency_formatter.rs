//! Locale aware rendering of monetary amounts.

use log::warn;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::currency::Currency;
use super::fx_errors::FxError;
use super::locale::NumberLocale;
use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Converts a floating point amount into a `Decimal`.
///
/// NaN, the infinities and magnitudes beyond the range of `Decimal` are
/// rejected with `InvalidAmount`.
pub fn amount_from_f64(amount: f64) -> Result<Decimal, FxError> {
    if !amount.is_finite() {
        warn!("Rejecting non-finite amount {}", amount);
        return Err(FxError::InvalidAmount(amount.to_string()));
    }
    Decimal::from_f64(amount).ok_or_else(|| {
        warn!("Rejecting out of range amount {}", amount);
        FxError::InvalidAmount(amount.to_string())
    })
}

/// Formats amounts for a fixed locale and display currency.
///
/// The formatter holds no global state: locale and currency are supplied at
/// construction, so two formatters with different settings can coexist.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CurrencyFormatter {
    locale: NumberLocale,
    currency: Currency,
}

impl CurrencyFormatter {
    pub fn new(locale: NumberLocale, currency: Currency) -> Self {
        Self { locale, currency }
    }

    pub fn locale(&self) -> NumberLocale {
        self.locale
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Formats a floating point amount already denominated in the display
    /// currency, e.g. `1000.0` -> `₹1,000.00` (or `1,000.00` without symbol).
    pub fn format_amount(&self, amount: f64, include_symbol: bool) -> Result<String, FxError> {
        let value = amount_from_f64(amount)?;
        Ok(self.format_decimal(value, include_symbol))
    }

    /// Shorthand for [`format_amount`](Self::format_amount) with the symbol shown.
    pub fn format_price(&self, amount: f64) -> Result<String, FxError> {
        self.format_amount(amount, true)
    }

    /// Formats a decimal amount with exactly two fractional digits.
    ///
    /// Rounds half away from zero. Amounts that round to zero are written
    /// without a sign.
    pub fn format_decimal(&self, amount: Decimal, include_symbol: bool) -> String {
        let rounded = amount.round_dp_with_strategy(
            DISPLAY_DECIMAL_PRECISION,
            RoundingStrategy::MidpointAwayFromZero,
        );
        let negative = rounded.is_sign_negative() && !rounded.is_zero();

        let plain = rounded.abs().to_string();
        let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), ""));
        let mut fraction = fraction.to_string();
        while fraction.len() < DISPLAY_DECIMAL_PRECISION as usize {
            fraction.push('0');
        }

        let mut out = String::with_capacity(plain.len() + 8);
        if negative {
            out.push('-');
        }
        if include_symbol {
            out.push_str(&self.currency.prefix());
        }
        out.push_str(&self.locale.group_digits(integer));
        out.push(self.locale.decimal_separator());
        out.push_str(&fraction);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn inr() -> CurrencyFormatter {
        CurrencyFormatter::default()
    }

    #[test]
    fn test_format_thousand_with_symbol() {
        assert_eq!(inr().format_amount(1000.0, true).unwrap(), "₹1,000.00");
    }

    #[test]
    fn test_format_thousand_without_symbol() {
        assert_eq!(inr().format_amount(1000.0, false).unwrap(), "1,000.00");
    }

    #[test]
    fn test_format_lakh_and_crore() {
        let f = inr();
        assert_eq!(f.format_amount(100000.0, true).unwrap(), "₹1,00,000.00");
        assert_eq!(f.format_amount(12345678.9, true).unwrap(), "₹1,23,45,678.90");
    }

    #[test]
    fn test_format_small_amounts() {
        let f = inr();
        assert_eq!(f.format_amount(0.0, true).unwrap(), "₹0.00");
        assert_eq!(f.format_amount(5.5, true).unwrap(), "₹5.50");
        assert_eq!(f.format_amount(999.999, false).unwrap(), "1,000.00");
    }

    #[test]
    fn test_format_negative_amounts() {
        let f = inr();
        assert_eq!(f.format_amount(-1000.0, true).unwrap(), "-₹1,000.00");
        assert_eq!(f.format_amount(-2.5, false).unwrap(), "-2.50");
    }

    #[test]
    fn test_negative_amount_rounding_to_zero_has_no_sign() {
        let f = inr();
        assert_eq!(f.format_amount(-0.001, true).unwrap(), "₹0.00");
        assert_eq!(f.format_amount(-0.0, false).unwrap(), "0.00");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        let f = inr();
        assert_eq!(f.format_decimal(dec!(2.345), false), "2.35");
        assert_eq!(f.format_decimal(dec!(-2.345), false), "-2.35");
        assert_eq!(f.format_decimal(dec!(2.344), false), "2.34");
    }

    #[test]
    fn test_non_finite_amounts_are_rejected() {
        let f = inr();
        assert!(matches!(
            f.format_amount(f64::NAN, true),
            Err(FxError::InvalidAmount(_))
        ));
        assert!(matches!(
            f.format_amount(f64::INFINITY, true),
            Err(FxError::InvalidAmount(_))
        ));
        assert!(matches!(
            f.format_amount(f64::NEG_INFINITY, false),
            Err(FxError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_amount_beyond_decimal_range_is_rejected() {
        assert!(matches!(
            amount_from_f64(1e30),
            Err(FxError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_other_locale_and_currency() {
        let f = CurrencyFormatter::new(NumberLocale::EnUs, Currency::new("USD").unwrap());
        assert_eq!(f.format_amount(1234567.0, true).unwrap(), "$1,234,567.00");

        let chf = CurrencyFormatter::new(NumberLocale::EnGb, Currency::new("CHF").unwrap());
        assert_eq!(chf.format_amount(10.0, true).unwrap(), "CHF\u{a0}10.00");
    }
}
