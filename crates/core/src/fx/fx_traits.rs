use rust_decimal::Decimal;

use super::fx_errors::FxError;
use crate::errors::Result;

/// A source of conversion rates.
///
/// The storefront ships with a static table, but anything able to answer
/// "how many `to` per one `from`" at call time can be plugged in.
pub trait RateProviderTrait: Send + Sync {
    fn get_rate(&self, from_currency: &str, to_currency: &str)
        -> std::result::Result<Decimal, FxError>;
}

/// Trait defining the contract for price formatting and conversion.
pub trait FxServiceTrait: Send + Sync {
    /// Formats an amount already in the display currency.
    fn format_amount(&self, amount: f64, include_symbol: bool) -> Result<String>;

    /// Formats an amount already in the display currency, symbol included.
    fn format_price(&self, amount: f64) -> Result<String>;

    /// Converts an amount from the source currency into the display currency.
    fn convert(&self, source_amount: Decimal) -> Result<Decimal>;

    /// Converts from the source currency and formats the result.
    fn convert_and_format(&self, source_amount: f64) -> Result<String>;
}
