//! Shared helpers: integer money arithmetic and display formatting.

pub mod money;

pub use money::{format_currency, format_number, format_percent};
