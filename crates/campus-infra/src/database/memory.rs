//! In-memory repositories - used for local development when no database
//! is configured. Data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use campus_core::domain::{Listing, User};
use campus_core::error::RepoError;
use campus_core::ports::{BaseRepository, ListingFilter, ListingRepository, UserRepository};

/// In-memory user store keyed by id, with a uniqueness check on email.
#[derive(Default)]
pub struct InMemoryUserRepository {
    store: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn save(&self, user: User) -> Result<User, RepoError> {
        let mut store = self.store.write().await;

        // Same backstop the database enforces with a unique index.
        let duplicate = store
            .values()
            .any(|u| u.id != user.id && u.email == user.email);
        if duplicate {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }

        store.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        match self.store.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        Ok(self
            .store
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }
}

/// In-memory listing store keyed by id.
#[derive(Default)]
pub struct InMemoryListingRepository {
    store: RwLock<HashMap<Uuid, Listing>>,
}

impl InMemoryListingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn newest_first(mut listings: Vec<Listing>) -> Vec<Listing> {
    listings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    listings
}

#[async_trait]
impl BaseRepository<Listing, Uuid> for InMemoryListingRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Listing>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn save(&self, listing: Listing) -> Result<Listing, RepoError> {
        self.store
            .write()
            .await
            .insert(listing.id, listing.clone());
        Ok(listing)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        match self.store.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}

#[async_trait]
impl ListingRepository for InMemoryListingRepository {
    async fn find_filtered(&self, filter: &ListingFilter) -> Result<Vec<Listing>, RepoError> {
        let needle = filter.search.as_deref().map(str::to_lowercase);

        let matches = self
            .store
            .read()
            .await
            .values()
            .filter(|listing| {
                needle
                    .as_deref()
                    .is_none_or(|n| listing.name.to_lowercase().contains(n))
            })
            .filter(|listing| filter.category.is_none_or(|c| listing.category == c))
            .filter(|listing| filter.offer_type.is_none_or(|t| listing.offer_type == t))
            .cloned()
            .collect();

        Ok(newest_first(matches))
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Listing>, RepoError> {
        let matches = self
            .store
            .read()
            .await
            .values()
            .filter(|listing| listing.owner_id == owner_id)
            .cloned()
            .collect();

        Ok(newest_first(matches))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::domain::validate::NewListing;
    use campus_core::domain::{Category, OfferType};

    fn listing(owner_id: Uuid, name: &str, category: Category) -> Listing {
        Listing::create(
            owner_id,
            "Mehmet".to_string(),
            NewListing {
                name: name.to_string(),
                description: "desc".to_string(),
                category,
                offer_type: OfferType::ForLoan,
                price: None,
                contact: "mehmet@example.com".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn save_and_find_roundtrip() {
        let repo = InMemoryListingRepository::new();
        let saved = repo
            .save(listing(Uuid::new_v4(), "Physics notes", Category::Note))
            .await
            .unwrap();

        let found = repo.find_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Physics notes");
    }

    #[tokio::test]
    async fn search_matches_name_case_insensitively() {
        let repo = InMemoryListingRepository::new();
        let owner = Uuid::new_v4();
        repo.save(listing(owner, "Physics NOTES", Category::Note))
            .await
            .unwrap();
        repo.save(listing(owner, "Oscilloscope", Category::Equipment))
            .await
            .unwrap();

        let filter = ListingFilter {
            search: Some("note".to_string()),
            ..Default::default()
        };
        let found = repo.find_filtered(&filter).await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Physics NOTES");
    }

    #[tokio::test]
    async fn filters_combine_and_results_are_newest_first() {
        let repo = InMemoryListingRepository::new();
        let owner = Uuid::new_v4();
        repo.save(listing(owner, "Old book", Category::Book))
            .await
            .unwrap();
        repo.save(listing(owner, "New book", Category::Book))
            .await
            .unwrap();
        repo.save(listing(owner, "Notes", Category::Note))
            .await
            .unwrap();

        let filter = ListingFilter {
            category: Some(Category::Book),
            ..Default::default()
        };
        let found = repo.find_filtered(&filter).await.unwrap();

        assert_eq!(found.len(), 2);
        assert!(found[0].created_at >= found[1].created_at);
    }

    #[tokio::test]
    async fn find_by_owner_excludes_other_users() {
        let repo = InMemoryListingRepository::new();
        let owner = Uuid::new_v4();
        repo.save(listing(owner, "Mine", Category::Book))
            .await
            .unwrap();
        repo.save(listing(Uuid::new_v4(), "Theirs", Category::Book))
            .await
            .unwrap();

        let found = repo.find_by_owner(owner).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Mine");
    }

    #[tokio::test]
    async fn duplicate_email_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.save(User::new(
            "Ayşe".to_string(),
            "ayse@example.com".to_string(),
            "hash-1".to_string(),
        ))
        .await
        .unwrap();

        let err = repo
            .save(User::new(
                "Other".to_string(),
                "ayse@example.com".to_string(),
                "hash-2".to_string(),
            ))
            .await
            .unwrap_err();

        assert!(matches!(err, RepoError::Constraint(_)));
    }

    #[tokio::test]
    async fn delete_missing_listing_is_not_found() {
        let repo = InMemoryListingRepository::new();
        let err = repo.delete(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }
}
