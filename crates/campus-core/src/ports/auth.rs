//! Authentication ports.

use uuid::Uuid;

/// Claims carried by a signed token: the user identity and its expiry.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub user_id: Uuid,
    pub exp: i64,
}

/// Token service trait for signing and verifying session tokens.
///
/// Verification is stateless - a pure function of (token, current time,
/// secret). There is no server-side revocation list; an issued token stays
/// valid until it expires.
pub trait TokenService: Send + Sync {
    /// Sign a token carrying the user identifier.
    fn generate_token(&self, user_id: Uuid) -> Result<String, AuthError>;

    /// Verify a token and decode its claims.
    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError>;
}

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password with a one-way salted hash.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing authorization header")]
    MissingAuth,

    #[error("User no longer exists")]
    UnknownUser,

    #[error("Hashing error: {0}")]
    HashingError(String),
}
