//! `OpenAPI` document for the calculator routes.

use axum::Json;
use utoipa::OpenApi;

use super::dto::{CalculateRequest, CalculateResponse, ErrorResponse, HealthResponse};
use super::handlers;

#[derive(OpenApi)]
#[openapi(
    info(title = "Calculator API", description = "Stateless arithmetic and scientific evaluation"),
    paths(handlers::calculate, handlers::calculate_legacy, handlers::health_check),
    components(schemas(CalculateRequest, CalculateResponse, ErrorResponse, HealthResponse)),
    tags(
        (name = "calculator", description = "Calculation endpoints"),
        (name = "system", description = "Health and metadata"),
    )
)]
pub struct ApiDoc;

/// Handler for GET /openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
