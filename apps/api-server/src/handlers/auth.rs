//! Authentication handlers.

use actix_web::{HttpResponse, web};
use std::sync::Arc;

use campus_core::domain::User;
use campus_core::domain::validate::is_valid_email;
use campus_core::ports::{PasswordService, TokenService};
use campus_shared::dto::{AuthResponse, LoginRequest, MeResponse, RegisterRequest, UserSummary};

use crate::middleware::auth::AuthenticatedUser;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn summary(user: &User) -> UserSummary {
    UserSummary {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
    }
}

/// POST /api/auth/register
pub async fn register(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Validate input
    let name = req.name.unwrap_or_default().trim().to_string();
    let email = req.email.unwrap_or_default().trim().to_string();
    let password = req.password.unwrap_or_default();

    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(AppError::BadRequest("All fields are required".to_string()));
    }
    if password.chars().count() < 6 {
        return Err(AppError::BadRequest(
            "Password must be at least 6 characters".to_string(),
        ));
    }
    if !is_valid_email(&email) {
        return Err(AppError::BadRequest(
            "Enter a valid email address".to_string(),
        ));
    }

    // Check if the email is already taken
    if state.users.find_by_email(&email).await?.is_some() {
        return Err(AppError::Conflict(
            "This email address is already in use".to_string(),
        ));
    }

    // Hash password
    let password_hash = password_service
        .hash(&password)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    // Create user
    let user = User::new(name, email, password_hash);
    let saved_user = state.users.save(user).await?;

    // Generate token
    let token = token_service
        .generate_token(saved_user.id)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Created().json(AuthResponse {
        token,
        user: summary(&saved_user),
    }))
}

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let email = req.email.unwrap_or_default().trim().to_string();
    let password = req.password.unwrap_or_default();
    if email.is_empty() || password.is_empty() {
        return Err(AppError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    // One generic 401 for both unknown email and wrong password, so the
    // response does not reveal which accounts exist.
    let user = state
        .users
        .find_by_email(&email)
        .await?
        .ok_or(AppError::Unauthorized)?;

    let valid = password_service
        .verify(&password, &user.password_hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    if !valid {
        return Err(AppError::Unauthorized);
    }

    // Generate a fresh token
    let token = token_service
        .generate_token(user.id)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        token,
        user: summary(&user),
    }))
}

/// GET /api/auth/me - Protected route
pub async fn me(user: AuthenticatedUser) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(MeResponse {
        user: summary(&user.0),
    }))
}
