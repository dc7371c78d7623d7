use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Locale used to render prices when nothing else is configured
pub const DEFAULT_LOCALE: &str = "en-IN";

/// Currency prices are displayed in
pub const DEFAULT_CURRENCY: &str = "INR";

/// Currency that upstream catalog prices may still be denominated in
pub const DEFAULT_SOURCE_CURRENCY: &str = "USD";

/// Units of INR per 1 USD. Static until a live rate source is wired in.
pub const USD_TO_INR_RATE: Decimal = dec!(75);

/// Minimum length of a category name or slug
pub const MIN_CATEGORY_FIELD_LEN: usize = 2;
