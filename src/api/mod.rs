//! API handlers for the catalog REST endpoints

pub mod auth;
pub mod crts;
pub mod health;
pub mod manufacturers;
pub mod openapi;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let upload_dir = state.config.storage.upload_dir.clone();
    let upload_prefix = state.config.storage.public_upload_prefix.clone();
    let upload_body_limit = state.services.uploads.request_body_limit();

    let api_routes = Router::new()
        // Health check
        .route("/api/health", get(health::health_check))
        // Admin
        .route("/api/admin/login", post(auth::login))
        // Catalog entries
        .route("/api/crts", get(crts::list_crts))
        .route("/api/crts", post(crts::create_crt))
        .route("/api/crts/:id", put(crts::update_crt))
        .route("/api/crts/:id", delete(crts::delete_crt))
        .route("/api/crts/:id/images", post(crts::upload_images))
        .route("/api/crts/:id/images", delete(crts::delete_image))
        // Manufacturers
        .route("/api/manufacturers", get(manufacturers::list_manufacturers))
        .route("/api/manufacturers/:slug", get(manufacturers::get_manufacturer))
        .layer(DefaultBodyLimit::max(upload_body_limit))
        .with_state(state);

    Router::new()
        .merge(api_routes)
        .merge(openapi::create_openapi_router())
        // Uploaded images are served read-only from their public prefix
        .nest_service(&upload_prefix, ServeDir::new(upload_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
