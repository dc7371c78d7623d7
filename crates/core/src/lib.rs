//! Storefront Core - price formatting, currency conversion and catalog slugs.
//!
//! Everything here is pure and synchronous. Formatting locale, display currency
//! and exchange rate are passed in explicitly (see [`settings::StorefrontSettings`])
//! rather than read from globals.

pub mod catalog;
pub mod constants;
pub mod errors;
pub mod fx;
pub mod pricing;
pub mod settings;

// Re-export the entry points used by the admin forms and the storefront pages
pub use catalog::slugify;
pub use fx::{CurrencyFormatter, FxService, FxServiceTrait};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
