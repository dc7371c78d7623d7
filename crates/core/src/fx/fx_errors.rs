use thiserror::Error;

/// Errors raised by currency formatting and conversion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FxError {
    /// The amount is NaN, infinite, or too large to represent as a decimal.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid exchange rate: {0}")]
    InvalidRate(String),

    #[error("Exchange rate not found: {0}")]
    RateNotFound(String),

    #[error("Currency '{0}' is not supported")]
    UnsupportedCurrency(String),

    #[error("Locale '{0}' is not supported")]
    UnsupportedLocale(String),
}
