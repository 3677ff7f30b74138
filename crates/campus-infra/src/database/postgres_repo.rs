//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Select};

use campus_core::domain::{Listing, User};
use campus_core::error::RepoError;
use campus_core::ports::{ListingFilter, ListingRepository, UserRepository};

use super::entity::listing::{self, Entity as ListingEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL listing repository.
pub type PostgresListingRepository = PostgresBaseRepository<ListingEntity>;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        // Mask email for logging to avoid PII in logs
        let masked = if let Some(at_pos) = email.find('@') {
            let (local, domain) = email.split_at(at_pos);
            let masked_local = if local.len() > 1 {
                format!("{}***", &local[..1])
            } else {
                "***".to_string()
            };
            format!("{}{}", masked_local, domain)
        } else {
            "***".to_string()
        };
        tracing::debug!(user_email = %masked, "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }
}

fn newest_first(query: Select<ListingEntity>) -> Select<ListingEntity> {
    query.order_by_desc(listing::Column::CreatedAt)
}

#[async_trait]
impl ListingRepository for PostgresListingRepository {
    async fn find_filtered(&self, filter: &ListingFilter) -> Result<Vec<Listing>, RepoError> {
        let mut query = ListingEntity::find();

        if let Some(search) = &filter.search {
            let pattern = format!("%{search}%");
            query = query.filter(Expr::col(listing::Column::Name).ilike(pattern));
        }
        if let Some(category) = filter.category {
            query = query.filter(listing::Column::Category.eq(listing::Category::from(category)));
        }
        if let Some(offer_type) = filter.offer_type {
            query =
                query.filter(listing::Column::OfferType.eq(listing::OfferType::from(offer_type)));
        }

        let result = newest_first(query)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_owner(&self, owner_id: uuid::Uuid) -> Result<Vec<Listing>, RepoError> {
        let result = newest_first(
            ListingEntity::find().filter(listing::Column::OwnerId.eq(owner_id)),
        )
        .all(&self.db)
        .await
        .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
