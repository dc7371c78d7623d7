//! FX module - currency codes, locale formatting, rate lookup and conversion.

pub mod currency;
pub mod currency_converter;
pub mod currency_formatter;
mod fx_errors;
mod fx_model;
mod fx_service;
mod fx_traits;
pub mod locale;

pub use currency::{currency_symbol, normalize_currency_code, Currency};
pub use currency_converter::CurrencyConverter;
pub use currency_formatter::{amount_from_f64, CurrencyFormatter};
pub use fx_errors::FxError;
pub use fx_model::ExchangeRate;
pub use fx_service::FxService;
pub use fx_traits::{FxServiceTrait, RateProviderTrait};
pub use locale::NumberLocale;
