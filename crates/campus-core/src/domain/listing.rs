use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validate::{ListingViolation, NewListing};

/// Item category - closed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Book,
    Note,
    Equipment,
}

impl Category {
    /// Parse a wire value. Returns `None` for anything outside the enum.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "book" => Some(Self::Book),
            "note" => Some(Self::Note),
            "equipment" => Some(Self::Equipment),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Book => "book",
            Self::Note => "note",
            Self::Equipment => "equipment",
        }
    }
}

/// Whether a listing is offered for sale or for loan.
///
/// Mutually exclusive with price semantics: for-sale listings carry a
/// non-negative price, for-loan listings carry none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OfferType {
    #[serde(rename = "for-sale")]
    ForSale,
    #[serde(rename = "for-loan")]
    ForLoan,
}

impl OfferType {
    /// Parse a wire value. Returns `None` for anything outside the enum.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "for-sale" => Some(Self::ForSale),
            "for-loan" => Some(Self::ForLoan),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ForSale => "for-sale",
            Self::ForLoan => "for-loan",
        }
    }
}

/// Listing entity - a marketplace item owned by the user who created it.
///
/// `owner_name` is denormalized at creation time and is not kept in sync
/// with later owner renames.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub offer_type: OfferType,
    pub price: Option<f64>,
    pub contact: String,
    pub owner_id: Uuid,
    pub owner_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update of a listing, as supplied by the owner.
///
/// Raw enum values stay strings here: unknown category/offer-type values
/// in an update are silently ignored rather than rejected, while create
/// rejects them outright. Existing clients rely on the lenient update.
#[derive(Debug, Clone, Default)]
pub struct ListingUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub offer_type: Option<String>,
    pub price: Option<f64>,
    pub contact: Option<String>,
}

impl Listing {
    /// Create a listing from validated fields, owned by the given user.
    pub fn create(owner_id: Uuid, owner_name: String, fields: NewListing) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: fields.name,
            description: fields.description,
            category: fields.category,
            offer_type: fields.offer_type,
            price: fields.price,
            contact: fields.contact,
            owner_id,
            owner_name,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the given user may mutate this listing.
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id == user_id
    }

    /// Apply a partial update in place, re-deriving the price/offer-type
    /// coupling.
    ///
    /// Absent or empty fields retain their prior value. Switching to
    /// for-loan clears the price; switching to for-sale requires a price
    /// (supplied in the same update, or already present). A price is only
    /// accepted while the listing is for-sale, and never a negative one.
    pub fn apply_update(&mut self, update: ListingUpdate) -> Result<(), ListingViolation> {
        if let Some(price) = update.price {
            if price < 0.0 {
                return Err(ListingViolation::InvalidPrice);
            }
        }

        if let Some(name) = non_empty(update.name) {
            self.name = name;
        }
        if let Some(description) = non_empty(update.description) {
            self.description = description;
        }
        if let Some(contact) = non_empty(update.contact) {
            self.contact = contact;
        }
        if let Some(raw) = update.category {
            if let Some(category) = Category::parse(&raw) {
                self.category = category;
            }
        }
        if let Some(raw) = update.offer_type {
            if let Some(offer_type) = OfferType::parse(&raw) {
                match offer_type {
                    OfferType::ForLoan => self.price = None,
                    OfferType::ForSale => {
                        let price = update.price.or_else(|| {
                            (self.offer_type == OfferType::ForSale)
                                .then_some(self.price)
                                .flatten()
                        });
                        self.price = Some(price.ok_or(ListingViolation::InvalidPrice)?);
                    }
                }
                self.offer_type = offer_type;
            }
        }
        if self.offer_type == OfferType::ForSale {
            if let Some(price) = update.price {
                self.price = Some(price);
            }
        }

        self.updated_at = Utc::now();
        Ok(())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale_listing() -> Listing {
        Listing::create(
            Uuid::new_v4(),
            "Ayşe".to_string(),
            NewListing {
                name: "Calculus textbook".to_string(),
                description: "Second edition, barely used".to_string(),
                category: Category::Book,
                offer_type: OfferType::ForSale,
                price: Some(150.0),
                contact: "ayse@example.com".to_string(),
            },
        )
    }

    #[test]
    fn parse_rejects_unknown_enum_values() {
        assert_eq!(Category::parse("book"), Some(Category::Book));
        assert_eq!(Category::parse("furniture"), None);
        assert_eq!(OfferType::parse("for-loan"), Some(OfferType::ForLoan));
        assert_eq!(OfferType::parse("rent"), None);
    }

    #[test]
    fn update_overwrites_present_fields_only() {
        let mut listing = sale_listing();
        listing
            .apply_update(ListingUpdate {
                name: Some("Calculus II textbook".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(listing.name, "Calculus II textbook");
        assert_eq!(listing.description, "Second edition, barely used");
        assert_eq!(listing.price, Some(150.0));
    }

    #[test]
    fn update_ignores_empty_strings() {
        let mut listing = sale_listing();
        listing
            .apply_update(ListingUpdate {
                name: Some("  ".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(listing.name, "Calculus textbook");
    }

    #[test]
    fn update_silently_ignores_unknown_category() {
        let mut listing = sale_listing();
        listing
            .apply_update(ListingUpdate {
                category: Some("furniture".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(listing.category, Category::Book);
    }

    #[test]
    fn switching_to_loan_clears_price() {
        let mut listing = sale_listing();
        listing
            .apply_update(ListingUpdate {
                offer_type: Some("for-loan".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(listing.offer_type, OfferType::ForLoan);
        assert_eq!(listing.price, None);
    }

    #[test]
    fn switching_to_sale_requires_price() {
        let mut listing = sale_listing();
        listing
            .apply_update(ListingUpdate {
                offer_type: Some("for-loan".to_string()),
                ..Default::default()
            })
            .unwrap();

        let err = listing
            .apply_update(ListingUpdate {
                offer_type: Some("for-sale".to_string()),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, ListingViolation::InvalidPrice));

        listing
            .apply_update(ListingUpdate {
                offer_type: Some("for-sale".to_string()),
                price: Some(90.0),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(listing.price, Some(90.0));
    }

    #[test]
    fn negative_price_rejected_on_update() {
        let mut listing = sale_listing();
        let err = listing
            .apply_update(ListingUpdate {
                price: Some(-5.0),
                ..Default::default()
            })
            .unwrap_err();

        assert!(matches!(err, ListingViolation::InvalidPrice));
        assert_eq!(listing.price, Some(150.0));
    }

    #[test]
    fn price_ignored_while_listing_is_for_loan() {
        let mut listing = sale_listing();
        listing
            .apply_update(ListingUpdate {
                offer_type: Some("for-loan".to_string()),
                ..Default::default()
            })
            .unwrap();

        listing
            .apply_update(ListingUpdate {
                price: Some(40.0),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(listing.price, None);
    }
}
