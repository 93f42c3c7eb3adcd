// Value parsing/formatting and static reference data.
pub mod brazilian_format;
pub mod food_basket;

pub use brazilian_format::{format_amount, format_currency, parse_amount, tidy_amount_input, RawAmount};
pub use food_basket::FoodBasketTable;
