//! HTTP handlers and route configuration.

mod auth;
mod health;
mod listings;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Auth routes
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(auth::register))
                    .route("/login", web::post().to(auth::login))
                    .route("/me", web::get().to(auth::me)),
            )
            // Listing routes; the static segment must come before "/{id}"
            .service(
                web::scope("/products")
                    .route("/user/my-products", web::get().to(listings::my_listings))
                    .route("", web::get().to(listings::list))
                    .route("", web::post().to(listings::create))
                    .route("/{id}", web::get().to(listings::get_by_id))
                    .route("/{id}", web::put().to(listings::update))
                    .route("/{id}", web::delete().to(listings::delete)),
            ),
    );
}
