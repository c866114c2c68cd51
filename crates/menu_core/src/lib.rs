//! Core model for the menu board: dish domain types, the mutable menu store,
//! and the checkout total calculation.

pub mod checkout;
pub mod domain;
pub mod store;

pub use checkout::{format_price, parse_price_or_zero, CheckoutSnapshot};
pub use domain::{DishDraft, ItemId, MenuItem};
pub use store::{DraftRejection, MenuStore};
