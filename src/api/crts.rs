//! Catalog entry endpoints

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::Crt,
    services::uploads::UploadFile,
};

/// Response wrapper for create/update operations
#[derive(Serialize, ToSchema)]
pub struct CrtResponse {
    pub success: bool,
    pub crt: Crt,
}

/// Bare success acknowledgement
#[derive(Serialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Response for an image upload
#[derive(Serialize, ToSchema)]
pub struct ImagesResponse {
    pub success: bool,
    /// Public URL paths of the stored images, in submission order
    pub images: Vec<String>,
}

/// Body of an image detach request
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteImageRequest {
    pub image_path: String,
}

/// List all catalog entries
#[utoipa::path(
    get,
    path = "/api/crts",
    tag = "crts",
    responses(
        (status = 200, description = "All catalog entries", body = Vec<Crt>),
        (status = 500, description = "Catalog file unreadable", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_crts(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Crt>>> {
    let crts = state.services.catalog.list().await?;
    Ok(Json(crts))
}

/// Create a new catalog entry
#[utoipa::path(
    post,
    path = "/api/crts",
    tag = "crts",
    request_body = Crt,
    responses(
        (status = 200, description = "Entry created", body = CrtResponse),
        (status = 409, description = "Duplicate id", body = crate::error::ErrorResponse),
        (status = 500, description = "Catalog file unwritable", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_crt(
    State(state): State<crate::AppState>,
    Json(crt): Json<Crt>,
) -> AppResult<Json<CrtResponse>> {
    let created = state.services.catalog.create(crt).await?;
    Ok(Json(CrtResponse {
        success: true,
        crt: created,
    }))
}

/// Replace a catalog entry wholesale
#[utoipa::path(
    put,
    path = "/api/crts/{id}",
    tag = "crts",
    params(("id" = i64, Path, description = "Entry id")),
    request_body = Crt,
    responses(
        (status = 200, description = "Entry updated", body = CrtResponse),
        (status = 404, description = "Entry not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_crt(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(crt): Json<Crt>,
) -> AppResult<Json<CrtResponse>> {
    let updated = state.services.catalog.update(id, crt).await?;
    Ok(Json(CrtResponse {
        success: true,
        crt: updated,
    }))
}

/// Delete a catalog entry
#[utoipa::path(
    delete,
    path = "/api/crts/{id}",
    tag = "crts",
    params(("id" = i64, Path, description = "Entry id")),
    responses(
        (status = 200, description = "Entry deleted (idempotent)", body = SuccessResponse)
    )
)]
pub async fn delete_crt(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<SuccessResponse>> {
    state.services.catalog.delete(id).await?;
    Ok(Json(SuccessResponse { success: true }))
}

/// Upload images and attach them to a catalog entry
#[utoipa::path(
    post,
    path = "/api/crts/{id}/images",
    tag = "crts",
    params(("id" = i64, Path, description = "Entry id")),
    request_body(content = Vec<u8>, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Images stored and attached", body = ImagesResponse),
        (status = 400, description = "No files, bad type, or oversize", body = crate::error::ErrorResponse),
        (status = 404, description = "Entry not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn upload_images(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    mut multipart: Multipart,
) -> AppResult<Json<ImagesResponse>> {
    // 404 before any file lands on disk
    state.services.catalog.get(id).await?;

    let mut files = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {}", e)))?
    {
        if field.name() != Some("images") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read file part: {}", e)))?;
        files.push(UploadFile {
            file_name,
            content_type,
            data: data.to_vec(),
        });
    }

    let paths = state.services.uploads.store(files).await?;
    let images = state.services.catalog.attach_images(id, paths).await?;
    Ok(Json(ImagesResponse {
        success: true,
        images,
    }))
}

/// Detach one image from a catalog entry
#[utoipa::path(
    delete,
    path = "/api/crts/{id}/images",
    tag = "crts",
    params(("id" = i64, Path, description = "Entry id")),
    request_body = DeleteImageRequest,
    responses(
        (status = 200, description = "Image detached; file deletion is best-effort", body = SuccessResponse),
        (status = 404, description = "Entry not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_image(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(body): Json<DeleteImageRequest>,
) -> AppResult<Json<SuccessResponse>> {
    state
        .services
        .catalog
        .remove_image(id, &body.image_path)
        .await?;
    Ok(Json(SuccessResponse { success: true }))
}
