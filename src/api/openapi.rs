//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, crts, health, manufacturers};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CRT Database API",
        version = "1.0.0",
        description = "Catalog REST API for cathode-ray tube displays",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        // Admin
        auth::login,
        // Catalog entries
        crts::list_crts,
        crts::create_crt,
        crts::update_crt,
        crts::delete_crt,
        crts::upload_images,
        crts::delete_image,
        // Manufacturers
        manufacturers::list_manufacturers,
        manufacturers::get_manufacturer,
    ),
    components(
        schemas(
            // Catalog entries
            crate::models::Crt,
            crate::models::crt::Measurement,
            crate::models::crt::Dimensions,
            crate::models::crt::PowerInput,
            crate::models::crt::Speakers,
            crate::models::crt::DocumentationLink,
            crate::models::crt::VideoIo,
            crate::models::enums::IoCategory,
            crate::models::enums::KnownIoCategory,
            crate::models::enums::ConnectorType,
            crate::models::enums::KnownConnector,
            crate::models::enums::SignalType,
            crate::models::enums::KnownSignal,
            crate::models::enums::IoDirection,
            crts::CrtResponse,
            crts::SuccessResponse,
            crts::ImagesResponse,
            crts::DeleteImageRequest,
            // Manufacturers
            crate::models::Manufacturer,
            // Admin
            auth::LoginRequest,
            auth::LoginResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "crts", description = "Catalog entry management"),
        (name = "manufacturers", description = "Manufacturer reference data"),
        (name = "admin", description = "Admin form access")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
