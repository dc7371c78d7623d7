use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::fx::{CurrencyFormatter, FxError};

/// A product line in the shopping cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub unit_price: Decimal,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(unit_price: Decimal, quantity: u32) -> Self {
        Self {
            unit_price,
            quantity,
        }
    }

    pub fn line_total(&self) -> Result<Decimal, FxError> {
        self.unit_price
            .checked_mul(Decimal::from(self.quantity))
            .ok_or_else(|| {
                FxError::InvalidAmount(format!("{} x {} overflows", self.unit_price, self.quantity))
            })
    }

    /// Renders the line total, plus a per-unit label when more than one unit
    /// is in the cart.
    pub fn display(&self, formatter: &CurrencyFormatter) -> Result<CartLineDisplay, FxError> {
        let unit_label = (self.quantity > 1)
            .then(|| format!("{} each", formatter.format_decimal(self.unit_price, true)));
        Ok(CartLineDisplay {
            total: formatter.format_decimal(self.line_total()?, true),
            unit_label,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineDisplay {
    pub total: String,
    pub unit_label: Option<String>,
}

/// Sum of all line totals.
pub fn cart_subtotal(lines: &[CartLine]) -> Result<Decimal, FxError> {
    lines.iter().try_fold(Decimal::ZERO, |acc, line| {
        acc.checked_add(line.line_total()?)
            .ok_or_else(|| FxError::InvalidAmount("cart subtotal overflows".to_string()))
    })
}
