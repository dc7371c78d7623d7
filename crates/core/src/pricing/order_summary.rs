use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::fx::{CurrencyFormatter, FxError};

const FREE_SHIPPING_LABEL: &str = "Free";

/// Checkout totals.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    #[serde(default)]
    pub discount: Decimal,
    #[serde(default)]
    pub tax: Decimal,
}

/// One labelled row of the rendered summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryLine {
    pub label: String,
    pub value: String,
}

impl SummaryLine {
    fn new(label: &str, value: String) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

impl OrderSummary {
    /// subtotal + shipping - discount + tax
    pub fn total(&self) -> Result<Decimal, FxError> {
        self.subtotal
            .checked_add(self.shipping)
            .and_then(|v| v.checked_sub(self.discount))
            .and_then(|v| v.checked_add(self.tax))
            .ok_or_else(|| FxError::InvalidAmount("order total overflows".to_string()))
    }

    /// Rows in display order. Shipping reads "Free" when zero; discount and tax
    /// rows only appear when positive.
    pub fn lines(&self, formatter: &CurrencyFormatter) -> Result<Vec<SummaryLine>, FxError> {
        let total = self.total()?;
        let shipping = if self.shipping.is_zero() {
            FREE_SHIPPING_LABEL.to_string()
        } else {
            formatter.format_decimal(self.shipping, true)
        };
        let mut lines = vec![
            SummaryLine::new("Subtotal", formatter.format_decimal(self.subtotal, true)),
            SummaryLine::new("Shipping", shipping),
        ];
        if self.discount > Decimal::ZERO {
            lines.push(SummaryLine::new(
                "Discount",
                formatter.format_decimal(-self.discount, true),
            ));
        }
        if self.tax > Decimal::ZERO {
            lines.push(SummaryLine::new(
                "Tax",
                formatter.format_decimal(self.tax, true),
            ));
        }
        lines.push(SummaryLine::new(
            "Total",
            formatter.format_decimal(total, true),
        ));
        Ok(lines)
    }
}
