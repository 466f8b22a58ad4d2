//! Manufacturer endpoints (read-only reference data)

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{error::AppResult, models::Manufacturer};

/// List all manufacturers
#[utoipa::path(
    get,
    path = "/api/manufacturers",
    tag = "manufacturers",
    responses(
        (status = 200, description = "All manufacturers", body = Vec<Manufacturer>),
        (status = 500, description = "Reference file unreadable", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_manufacturers(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Manufacturer>>> {
    let manufacturers = state.services.catalog.list_manufacturers().await?;
    Ok(Json(manufacturers))
}

/// Get one manufacturer by URL slug
#[utoipa::path(
    get,
    path = "/api/manufacturers/{slug}",
    tag = "manufacturers",
    params(("slug" = String, Path, description = "URL slug of the manufacturer name")),
    responses(
        (status = 200, description = "Manufacturer details", body = Manufacturer),
        (status = 404, description = "Unknown slug", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_manufacturer(
    State(state): State<crate::AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Manufacturer>> {
    let manufacturer = state.services.catalog.get_manufacturer(&slug).await?;
    Ok(Json(manufacturer))
}
