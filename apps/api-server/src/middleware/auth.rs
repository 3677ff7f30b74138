//! Authentication extractor for protected routes.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use futures::future::LocalBoxFuture;
use std::sync::Arc;

use campus_core::domain::User;
use campus_core::ports::{AuthError, TokenService, UserRepository};
use campus_shared::ErrorResponse;

use crate::state::AppState;

/// Authenticated user extractor.
///
/// Verifies the bearer token and resolves the persisted user it refers
/// to, so handlers get the current account (including its display name
/// for listing denormalization), not just a token payload. Use it in any
/// handler that requires authentication:
/// ```ignore
/// async fn protected_route(user: AuthenticatedUser) -> impl Responder {
///     format!("Hello, {}!", user.0.name)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

/// Error type for authentication failures.
#[derive(Debug)]
pub struct AuthenticationError(pub AuthError);

impl std::fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl actix_web::ResponseError for AuthenticationError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match &self.0 {
            AuthError::HashingError(_) => actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
            _ => actix_web::http::StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        let error = match &self.0 {
            AuthError::TokenExpired => ErrorResponse::new(401, "Token Expired")
                .with_detail("Your session has expired. Please login again."),
            AuthError::InvalidToken(msg) => {
                ErrorResponse::new(401, "Invalid Token").with_detail(msg.clone())
            }
            AuthError::MissingAuth => ErrorResponse::new(401, "Authentication Required")
                .with_detail("Please provide a valid Bearer token in the Authorization header."),
            AuthError::UnknownUser | AuthError::InvalidCredentials => {
                ErrorResponse::unauthorized()
            }
            AuthError::HashingError(msg) => {
                tracing::error!("Hashing failure during authentication: {}", msg);
                ErrorResponse::internal_error()
            }
        };

        actix_web::HttpResponse::build(self.status_code()).json(error)
    }
}

fn bearer_token(req: &HttpRequest) -> Result<String, AuthError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingAuth)?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| AuthError::InvalidToken("Invalid authorization header".to_string()))?;

    auth_str
        .strip_prefix("Bearer ")
        .map(str::to_string)
        .ok_or_else(|| AuthError::InvalidToken("Expected Bearer token".to_string()))
}

impl FromRequest for AuthenticatedUser {
    type Error = AuthenticationError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let token_service = req
                .app_data::<web::Data<Arc<dyn TokenService>>>()
                .ok_or_else(|| {
                    tracing::error!("TokenService not found in app data");
                    AuthenticationError(AuthError::InvalidToken(
                        "Server configuration error".to_string(),
                    ))
                })?;
            let state = req.app_data::<web::Data<AppState>>().ok_or_else(|| {
                tracing::error!("AppState not found in app data");
                AuthenticationError(AuthError::InvalidToken(
                    "Server configuration error".to_string(),
                ))
            })?;

            let token = bearer_token(&req).map_err(AuthenticationError)?;
            let claims = token_service
                .validate_token(&token)
                .map_err(AuthenticationError)?;

            // The token only proves identity; the account itself must
            // still exist in the store.
            let user = state
                .users
                .find_by_id(claims.user_id)
                .await
                .map_err(|e| {
                    tracing::error!("User lookup failed during authentication: {}", e);
                    AuthenticationError(AuthError::UnknownUser)
                })?
                .ok_or(AuthenticationError(AuthError::UnknownUser))?;

            Ok(AuthenticatedUser(user))
        })
    }
}
