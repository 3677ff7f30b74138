//! Listing CRUD handlers.
//!
//! Every mutation is gated by the `AuthenticatedUser` extractor and an
//! ownership check; validation is centralized in the domain layer.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use campus_core::domain::validate::{ListingDraft, validate_listing};
use campus_core::domain::{Category, Listing, ListingUpdate, OfferType};
use campus_core::ports::ListingFilter;
use campus_shared::dto::{
    CreateListingRequest, ListingQuery, ListingResponse, MessageResponse, UpdateListingRequest,
};

use crate::middleware::auth::AuthenticatedUser;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(listing: Listing) -> ListingResponse {
    ListingResponse {
        id: listing.id,
        name: listing.name,
        description: listing.description,
        category: listing.category.as_str().to_string(),
        offer_type: listing.offer_type.as_str().to_string(),
        price: listing.price,
        contact: listing.contact,
        owner_id: listing.owner_id,
        owner_name: listing.owner_name,
        created_at: listing.created_at,
        updated_at: listing.updated_at,
    }
}

fn to_responses(listings: Vec<Listing>) -> Vec<ListingResponse> {
    listings.into_iter().map(to_response).collect()
}

/// Fetch a listing and verify the caller owns it.
async fn owned_listing(state: &AppState, id: Uuid, owner_id: Uuid) -> AppResult<Listing> {
    let listing = state
        .listings
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Listing not found".to_string()))?;

    if !listing.is_owned_by(owner_id) {
        return Err(AppError::Forbidden(
            "Only the owner may modify this listing".to_string(),
        ));
    }

    Ok(listing)
}

/// GET /api/products
///
/// Public feed with optional search and filters. Filter values outside
/// the closed enums are silently dropped rather than rejected.
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<ListingQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();

    let filter = ListingFilter {
        search: query.search.filter(|s| !s.is_empty()),
        category: query.category.as_deref().and_then(Category::parse),
        offer_type: query.offer_type.as_deref().and_then(OfferType::parse),
    };

    let listings = state.listings.find_filtered(&filter).await?;
    Ok(HttpResponse::Ok().json(to_responses(listings)))
}

/// GET /api/products/{id}
pub async fn get_by_id(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let listing = state
        .listings
        .find_by_id(path.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Listing not found".to_string()))?;

    Ok(HttpResponse::Ok().json(to_response(listing)))
}

/// POST /api/products - Protected route
pub async fn create(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    body: web::Json<CreateListingRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let fields = validate_listing(ListingDraft {
        name: req.name,
        description: req.description,
        category: req.category,
        offer_type: req.offer_type,
        price: req.price,
        contact: req.contact,
    })?;

    let owner = user.0;
    let listing = Listing::create(owner.id, owner.name, fields);
    let saved = state.listings.save(listing).await?;

    Ok(HttpResponse::Created().json(to_response(saved)))
}

/// PUT /api/products/{id} - Protected route, owner only
pub async fn update(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    body: web::Json<UpdateListingRequest>,
) -> AppResult<HttpResponse> {
    let mut listing = owned_listing(&state, path.into_inner(), user.0.id).await?;

    let req = body.into_inner();
    listing.apply_update(ListingUpdate {
        name: req.name,
        description: req.description,
        category: req.category,
        offer_type: req.offer_type,
        price: req.price,
        contact: req.contact,
    })?;

    let saved = state.listings.save(listing).await?;
    Ok(HttpResponse::Ok().json(to_response(saved)))
}

/// DELETE /api/products/{id} - Protected route, owner only
pub async fn delete(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let listing = owned_listing(&state, path.into_inner(), user.0.id).await?;

    state.listings.delete(listing.id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Listing deleted".to_string(),
    }))
}

/// GET /api/products/user/my-products - Protected route
pub async fn my_listings(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> AppResult<HttpResponse> {
    let listings = state.listings.find_by_owner(user.0.id).await?;
    Ok(HttpResponse::Ok().json(to_responses(listings)))
}
