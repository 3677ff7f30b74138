//! Centralized listing and credential validation.
//!
//! Both the create and update paths go through the same constraint checks
//! here, instead of scattering enum/price conditionals across handlers.

use thiserror::Error;

use super::listing::{Category, OfferType};

/// Raw listing fields as they arrive from a client, before validation.
#[derive(Debug, Clone, Default)]
pub struct ListingDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub offer_type: Option<String>,
    pub price: Option<f64>,
    pub contact: Option<String>,
}

/// Validated listing fields, ready to become a `Listing`.
#[derive(Debug, Clone)]
pub struct NewListing {
    pub name: String,
    pub description: String,
    pub category: Category,
    pub offer_type: OfferType,
    pub price: Option<f64>,
    pub contact: String,
}

/// Which listing constraint a draft violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListingViolation {
    #[error("All required fields must be filled")]
    MissingField(&'static str),

    #[error("Invalid category")]
    UnknownCategory,

    #[error("Invalid offer type")]
    UnknownOfferType,

    #[error("A for-sale listing requires a price of zero or more")]
    InvalidPrice,
}

/// Validate a draft against every listing constraint.
///
/// Enum values outside the closed sets are hard errors here (the create
/// path); the update path tolerates them, see `Listing::apply_update`.
/// The price is normalized: kept for for-sale, cleared for for-loan.
pub fn validate_listing(draft: ListingDraft) -> Result<NewListing, ListingViolation> {
    let name = required(draft.name, "name")?;
    let description = required(draft.description, "description")?;
    let contact = required(draft.contact, "contact")?;
    let category_raw = required(draft.category, "category")?;
    let offer_raw = required(draft.offer_type, "type")?;

    let category = Category::parse(&category_raw).ok_or(ListingViolation::UnknownCategory)?;
    let offer_type = OfferType::parse(&offer_raw).ok_or(ListingViolation::UnknownOfferType)?;

    let price = match offer_type {
        OfferType::ForSale => match draft.price {
            Some(price) if price >= 0.0 => Some(price),
            _ => return Err(ListingViolation::InvalidPrice),
        },
        OfferType::ForLoan => None,
    };

    Ok(NewListing {
        name,
        description,
        category,
        offer_type,
        price,
        contact,
    })
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ListingViolation> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(ListingViolation::MissingField(field)),
    }
}

/// Basic email syntax check: one `@`, a dot somewhere in the domain part,
/// no whitespace. Intentionally loose - real verification would need a
/// confirmation mail, which is out of scope.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale_draft() -> ListingDraft {
        ListingDraft {
            name: Some("Lab notes".to_string()),
            description: Some("Organic chemistry, full semester".to_string()),
            category: Some("note".to_string()),
            offer_type: Some("for-sale".to_string()),
            price: Some(25.0),
            contact: Some("0555 123 4567".to_string()),
        }
    }

    #[test]
    fn valid_sale_draft_passes() {
        let listing = validate_listing(sale_draft()).unwrap();
        assert_eq!(listing.category, Category::Note);
        assert_eq!(listing.offer_type, OfferType::ForSale);
        assert_eq!(listing.price, Some(25.0));
    }

    #[test]
    fn missing_field_rejected() {
        let draft = ListingDraft {
            description: None,
            ..sale_draft()
        };
        assert_eq!(
            validate_listing(draft).unwrap_err(),
            ListingViolation::MissingField("description")
        );

        let draft = ListingDraft {
            contact: Some("   ".to_string()),
            ..sale_draft()
        };
        assert_eq!(
            validate_listing(draft).unwrap_err(),
            ListingViolation::MissingField("contact")
        );
    }

    #[test]
    fn out_of_enum_values_rejected_on_create() {
        let draft = ListingDraft {
            category: Some("furniture".to_string()),
            ..sale_draft()
        };
        assert_eq!(
            validate_listing(draft).unwrap_err(),
            ListingViolation::UnknownCategory
        );

        let draft = ListingDraft {
            offer_type: Some("rent".to_string()),
            ..sale_draft()
        };
        assert_eq!(
            validate_listing(draft).unwrap_err(),
            ListingViolation::UnknownOfferType
        );
    }

    #[test]
    fn for_sale_without_valid_price_rejected() {
        let draft = ListingDraft {
            price: None,
            ..sale_draft()
        };
        assert_eq!(
            validate_listing(draft).unwrap_err(),
            ListingViolation::InvalidPrice
        );

        let draft = ListingDraft {
            price: Some(-5.0),
            ..sale_draft()
        };
        assert_eq!(
            validate_listing(draft).unwrap_err(),
            ListingViolation::InvalidPrice
        );
    }

    #[test]
    fn for_loan_price_is_cleared() {
        let draft = ListingDraft {
            offer_type: Some("for-loan".to_string()),
            price: Some(25.0),
            ..sale_draft()
        };
        let listing = validate_listing(draft).unwrap();
        assert_eq!(listing.price, None);
    }

    #[test]
    fn string_fields_are_trimmed() {
        let draft = ListingDraft {
            name: Some("  Lab notes  ".to_string()),
            ..sale_draft()
        };
        let listing = validate_listing(draft).unwrap();
        assert_eq!(listing.name, "Lab notes");
    }

    #[test]
    fn email_syntax_check() {
        assert!(is_valid_email("ayse@example.com"));
        assert!(is_valid_email("a.b+c@sub.example.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("spaces in@example.com"));
        assert!(!is_valid_email("nodot@example"));
        assert!(!is_valid_email("@example.com"));
    }
}
