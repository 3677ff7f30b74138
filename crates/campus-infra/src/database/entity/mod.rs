//! SeaORM entity models and their domain conversions.

pub mod listing;
pub mod user;
