//! # Campus Infrastructure
//!
//! Concrete implementations of the ports defined in `campus-core`:
//! persistence, password hashing, and token signing.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL persistence via SeaORM. The
//!   in-memory repositories are always available and serve as the
//!   local-development fallback when no database is configured.

pub mod auth;
pub mod database;

pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
pub use database::{InMemoryListingRepository, InMemoryUserRepository};

#[cfg(feature = "postgres")]
pub use database::{DatabaseConfig, PostgresListingRepository, PostgresUserRepository};
