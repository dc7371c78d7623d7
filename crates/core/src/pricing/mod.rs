//! Pricing module - price, cart and checkout presentation.

mod cart;
mod order_summary;
mod price_display;

pub use cart::{cart_subtotal, CartLine, CartLineDisplay};
pub use order_summary::{OrderSummary, SummaryLine};
pub use price_display::{discount_percentage, PriceDisplay};
