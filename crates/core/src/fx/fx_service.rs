use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::currency::Currency;
use super::currency_converter::CurrencyConverter;
use super::currency_formatter::{amount_from_f64, CurrencyFormatter};
use super::fx_errors::FxError;
use super::fx_traits::{FxServiceTrait, RateProviderTrait};
use crate::errors::Result;

/// Formats prices in the display currency and converts amounts that are still
/// denominated in the source currency.
#[derive(Clone)]
pub struct FxService {
    formatter: CurrencyFormatter,
    rate_provider: Arc<dyn RateProviderTrait>,
    source_currency: Currency,
}

impl FxService {
    pub fn new(
        formatter: CurrencyFormatter,
        rate_provider: Arc<dyn RateProviderTrait>,
        source_currency: Currency,
    ) -> Self {
        Self {
            formatter,
            rate_provider,
            source_currency,
        }
    }

    pub fn formatter(&self) -> &CurrencyFormatter {
        &self.formatter
    }

    pub fn source_currency(&self) -> &Currency {
        &self.source_currency
    }

    /// Current rate from the source currency to the display currency.
    pub fn rate(&self) -> Result<Decimal> {
        let rate = self.rate_provider.get_rate(
            self.source_currency.code(),
            self.formatter.currency().code(),
        )?;
        Ok(rate)
    }
}

impl Default for FxService {
    /// en-IN / INR display, USD source, static rate of 75.
    fn default() -> Self {
        Self {
            formatter: CurrencyFormatter::default(),
            rate_provider: Arc::new(CurrencyConverter::with_default_rate()),
            source_currency: Currency::usd(),
        }
    }
}

impl FxServiceTrait for FxService {
    fn format_amount(&self, amount: f64, include_symbol: bool) -> Result<String> {
        Ok(self.formatter.format_amount(amount, include_symbol)?)
    }

    fn format_price(&self, amount: f64) -> Result<String> {
        self.format_amount(amount, true)
    }

    fn convert(&self, source_amount: Decimal) -> Result<Decimal> {
        let rate = self.rate()?;
        debug!(
            "Converting {} {} at rate {}",
            source_amount, self.source_currency, rate
        );
        let converted = source_amount.checked_mul(rate).ok_or_else(|| {
            FxError::InvalidAmount(format!(
                "{} {} at rate {} overflows",
                source_amount, self.source_currency, rate
            ))
        })?;
        Ok(converted)
    }

    fn convert_and_format(&self, source_amount: f64) -> Result<String> {
        let value = amount_from_f64(source_amount)?;
        let converted = self.convert(value)?;
        Ok(self.formatter.format_decimal(converted, true))
    }
}
