use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

use crate::constants::{DEFAULT_CURRENCY, DEFAULT_LOCALE, DEFAULT_SOURCE_CURRENCY, USD_TO_INR_RATE};
use crate::errors::{Error, Result};
use crate::fx::{Currency, CurrencyConverter, CurrencyFormatter, ExchangeRate, FxService, NumberLocale};

pub const ENV_LOCALE: &str = "SF_LOCALE";
pub const ENV_CURRENCY: &str = "SF_CURRENCY";
pub const ENV_SOURCE_CURRENCY: &str = "SF_SOURCE_CURRENCY";
pub const ENV_EXCHANGE_RATE: &str = "SF_EXCHANGE_RATE";

/// Display and conversion settings for prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorefrontSettings {
    /// BCP-47 tag of the number locale, e.g. "en-IN"
    pub locale: String,
    /// Currency prices are displayed in
    pub currency: String,
    /// Currency that unconverted amounts are denominated in
    pub source_currency: String,
    /// Units of `currency` per one unit of `source_currency`
    pub exchange_rate: Decimal,
}

impl Default for StorefrontSettings {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            source_currency: DEFAULT_SOURCE_CURRENCY.to_string(),
            exchange_rate: USD_TO_INR_RATE,
        }
    }
}

impl StorefrontSettings {
    /// Parses settings from JSON. Missing keys keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigIO(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&contents)
    }

    /// Defaults overridden by `SF_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides()
    }

    /// Applies `SF_*` environment variables on top of these settings.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from a key lookup (normally the process environment).
    /// Blank values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(locale) = get(ENV_LOCALE) {
            self.locale = locale;
        }
        if let Some(currency) = get(ENV_CURRENCY) {
            self.currency = currency;
        }
        if let Some(source) = get(ENV_SOURCE_CURRENCY) {
            self.source_currency = source;
        }
        if let Some(rate) = get(ENV_EXCHANGE_RATE) {
            self.exchange_rate = rate.trim().parse::<Decimal>().map_err(|e| {
                log::warn!("Ignoring unusable {}={}: {}", ENV_EXCHANGE_RATE, rate, e);
                Error::InvalidConfigValue(format!("{}: {}", ENV_EXCHANGE_RATE, e))
            })?;
        }

        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        self.number_locale()?;
        self.display_currency()?;
        self.source()?;
        if self.exchange_rate <= Decimal::ZERO {
            return Err(Error::InvalidConfigValue(format!(
                "exchangeRate must be positive, got {}",
                self.exchange_rate
            )));
        }
        Ok(())
    }

    pub fn number_locale(&self) -> Result<NumberLocale> {
        self.locale
            .parse()
            .map_err(|e| Error::InvalidConfigValue(format!("locale: {}", e)))
    }

    pub fn display_currency(&self) -> Result<Currency> {
        Currency::new(&self.currency)
            .map_err(|e| Error::InvalidConfigValue(format!("currency: {}", e)))
    }

    fn source(&self) -> Result<Currency> {
        Currency::new(&self.source_currency)
            .map_err(|e| Error::InvalidConfigValue(format!("sourceCurrency: {}", e)))
    }

    pub fn build_formatter(&self) -> Result<CurrencyFormatter> {
        Ok(CurrencyFormatter::new(
            self.number_locale()?,
            self.display_currency()?,
        ))
    }

    /// Rate table holding the configured source -> display rate.
    pub fn build_converter(&self) -> Result<CurrencyConverter> {
        let rate = ExchangeRate::new(&self.source_currency, &self.currency, self.exchange_rate)?;
        Ok(CurrencyConverter::new(vec![rate])?)
    }

    pub fn build_fx_service(&self) -> Result<FxService> {
        Ok(FxService::new(
            self.build_formatter()?,
            Arc::new(self.build_converter()?),
            self.source()?,
        ))
    }
}
