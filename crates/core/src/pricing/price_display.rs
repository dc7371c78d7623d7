use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::fx::CurrencyFormatter;

/// Percentage saved against the original price, rounded to a whole number.
///
/// Only defined when `original` is positive and above `amount`.
pub fn discount_percentage(amount: Decimal, original: Decimal) -> Option<i64> {
    if original <= Decimal::ZERO || original <= amount {
        return None;
    }
    let hundred = Decimal::ONE_HUNDRED;
    let pct = amount
        .checked_div(original)
        .and_then(|ratio| ratio.checked_mul(hundred))
        .and_then(|share| hundred.checked_sub(share))?;
    pct.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}

/// Rendered price with an optional struck-through original and discount label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceDisplay {
    pub price: String,
    pub original_price: Option<String>,
    pub discount_label: Option<String>,
}

impl PriceDisplay {
    pub fn new(
        formatter: &CurrencyFormatter,
        amount: Decimal,
        original: Option<Decimal>,
        show_discount: bool,
    ) -> Self {
        let price = formatter.format_decimal(amount, true);

        let discount = original
            .filter(|_| show_discount)
            .and_then(|orig| discount_percentage(amount, orig).map(|pct| (orig, pct)));

        match discount {
            Some((orig, pct)) => Self {
                price,
                original_price: Some(formatter.format_decimal(orig, true)),
                discount_label: Some(format!("{}% off", pct)),
            },
            None => Self {
                price,
                original_price: None,
                discount_label: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_discount_percentage() {
        assert_eq!(discount_percentage(dec!(750), dec!(1000)), Some(25));
        assert_eq!(discount_percentage(dec!(2), dec!(3)), Some(33));
        assert_eq!(discount_percentage(dec!(1), dec!(8)), Some(88));
    }

    #[test]
    fn test_discount_rounds_half_up() {
        // 100 - 87.5 = 12.5
        assert_eq!(discount_percentage(dec!(87.5), dec!(100)), Some(13));
    }

    #[test]
    fn test_no_discount_when_original_not_higher() {
        assert_eq!(discount_percentage(dec!(1000), dec!(1000)), None);
        assert_eq!(discount_percentage(dec!(1200), dec!(1000)), None);
        assert_eq!(discount_percentage(dec!(0), dec!(0)), None);
    }

    #[test]
    fn test_discount_overflow_yields_none() {
        assert_eq!(
            discount_percentage(Decimal::MIN, Decimal::new(1, 28)),
            None
        );
    }

    #[test]
    fn test_price_display_with_discount() {
        let display = PriceDisplay::new(
            &CurrencyFormatter::default(),
            dec!(1499),
            Some(dec!(1999)),
            true,
        );
        assert_eq!(display.price, "₹1,499.00");
        assert_eq!(display.original_price.as_deref(), Some("₹1,999.00"));
        assert_eq!(display.discount_label.as_deref(), Some("25% off"));
    }

    #[test]
    fn test_price_display_hides_discount_when_disabled() {
        let display = PriceDisplay::new(
            &CurrencyFormatter::default(),
            dec!(1499),
            Some(dec!(1999)),
            false,
        );
        assert_eq!(display.price, "₹1,499.00");
        assert!(display.original_price.is_none());
        assert!(display.discount_label.is_none());
    }

    #[test]
    fn test_price_display_ignores_lower_original() {
        let display =
            PriceDisplay::new(&CurrencyFormatter::default(), dec!(500), Some(dec!(400)), true);
        assert!(display.original_price.is_none());
    }
}
