//! Catalog module - slugs and category form models.

mod category_model;
mod category_model_tests;
pub mod slug;

pub use category_model::{Category, CategoryUpdate, NewCategory};
pub use slug::{is_valid_slug, slugify};
