use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Category, Listing, OfferType, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}

/// Browse filters for the public listing feed.
///
/// Already parsed: a query value outside the closed enums never reaches
/// the repository, it is dropped at the handler.
#[derive(Debug, Clone, Default)]
pub struct ListingFilter {
    pub search: Option<String>,
    pub category: Option<Category>,
    pub offer_type: Option<OfferType>,
}

/// Listing repository.
///
/// Both query methods return listings ordered by creation time descending,
/// newest first. No pagination - the full result set is returned.
#[async_trait]
pub trait ListingRepository: BaseRepository<Listing, Uuid> {
    /// All listings matching the filter. The search term is a
    /// case-insensitive substring match on the listing name only.
    async fn find_filtered(&self, filter: &ListingFilter) -> Result<Vec<Listing>, RepoError>;

    /// All listings owned by the given user.
    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Listing>, RepoError>;
}
