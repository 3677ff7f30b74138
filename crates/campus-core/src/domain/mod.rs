//! Domain entities - the core business objects.

mod listing;
mod user;

pub mod validate;

pub use listing::{Category, Listing, ListingUpdate, OfferType};
pub use user::User;
