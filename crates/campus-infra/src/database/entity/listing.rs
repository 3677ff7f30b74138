//! Listing entity for SeaORM.
//!
//! The closed enums are stored as their wire strings; the conversions to
//! and from the domain enums are exhaustive, so no invalid value can
//! round-trip through the database layer.

use sea_orm::Set;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Category {
    #[sea_orm(string_value = "book")]
    Book,
    #[sea_orm(string_value = "note")]
    Note,
    #[sea_orm(string_value = "equipment")]
    Equipment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum OfferType {
    #[sea_orm(string_value = "for-sale")]
    ForSale,
    #[sea_orm(string_value = "for-loan")]
    ForLoan,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "listings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub offer_type: OfferType,
    pub price: Option<f64>,
    pub contact: String,
    pub owner_id: Uuid,
    pub owner_name: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<campus_core::domain::Category> for Category {
    fn from(value: campus_core::domain::Category) -> Self {
        match value {
            campus_core::domain::Category::Book => Self::Book,
            campus_core::domain::Category::Note => Self::Note,
            campus_core::domain::Category::Equipment => Self::Equipment,
        }
    }
}

impl From<Category> for campus_core::domain::Category {
    fn from(value: Category) -> Self {
        match value {
            Category::Book => Self::Book,
            Category::Note => Self::Note,
            Category::Equipment => Self::Equipment,
        }
    }
}

impl From<campus_core::domain::OfferType> for OfferType {
    fn from(value: campus_core::domain::OfferType) -> Self {
        match value {
            campus_core::domain::OfferType::ForSale => Self::ForSale,
            campus_core::domain::OfferType::ForLoan => Self::ForLoan,
        }
    }
}

impl From<OfferType> for campus_core::domain::OfferType {
    fn from(value: OfferType) -> Self {
        match value {
            OfferType::ForSale => Self::ForSale,
            OfferType::ForLoan => Self::ForLoan,
        }
    }
}

/// Conversion from SeaORM Model to domain Listing.
impl From<Model> for campus_core::domain::Listing {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            category: model.category.into(),
            offer_type: model.offer_type.into(),
            price: model.price,
            contact: model.contact,
            owner_id: model.owner_id,
            owner_name: model.owner_name,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from domain Listing to SeaORM ActiveModel.
impl From<campus_core::domain::Listing> for ActiveModel {
    fn from(listing: campus_core::domain::Listing) -> Self {
        Self {
            id: Set(listing.id),
            name: Set(listing.name),
            description: Set(listing.description),
            category: Set(listing.category.into()),
            offer_type: Set(listing.offer_type.into()),
            price: Set(listing.price),
            contact: Set(listing.contact),
            owner_id: Set(listing.owner_id),
            owner_name: Set(listing.owner_name),
            created_at: Set(listing.created_at.into()),
            updated_at: Set(listing.updated_at.into()),
        }
    }
}
