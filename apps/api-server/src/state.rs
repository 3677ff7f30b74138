//! Application state - shared across all handlers.

use std::sync::Arc;

use campus_core::ports::{ListingRepository, UserRepository};
use campus_infra::database::{InMemoryListingRepository, InMemoryUserRepository};
use campus_infra::{DatabaseConfig, PostgresListingRepository, PostgresUserRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub listings: Arc<dyn ListingRepository>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    ///
    /// Connects to PostgreSQL when configured; otherwise (or when the
    /// connection fails) falls back to in-memory repositories so the
    /// server stays usable for local development.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        match db_config {
            Some(config) => match campus_infra::database::connect(config).await {
                Ok(conn) => Self {
                    users: Arc::new(PostgresUserRepository::new(conn.clone())),
                    listings: Arc::new(PostgresListingRepository::new(conn)),
                },
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Self::in_memory()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        }
    }

    /// State backed entirely by in-memory repositories.
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            listings: Arc::new(InMemoryListingRepository::new()),
        }
    }
}
