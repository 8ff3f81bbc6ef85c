//! REST handlers for the calculator module
//!
//! Both calculation routes are thin shims over [`Service::evaluate`]; they only
//! differ in how the router mounts them.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};
use calculator_sdk::CalculationRequest;

use crate::domain::Service;

use super::dto::{CalculateRequest, CalculateResponse, ErrorResponse, HealthResponse};
use super::error::RestError;

type Payload = Result<Json<CalculateRequest>, JsonRejection>;

fn evaluate_payload(
    service: &Service,
    payload: Payload,
) -> Result<Json<CalculateResponse>, RestError> {
    let Json(dto) = payload?;
    let request = CalculationRequest::try_from(dto)?;
    let result = service.evaluate(&request)?;
    Ok(Json(CalculateResponse { result }))
}

/// Handler for POST /api/calculate
#[utoipa::path(
    post,
    path = "/api/calculate",
    tag = "calculator",
    request_body = CalculateRequest,
    responses(
        (status = 200, description = "Calculation result", body = CalculateResponse),
        (status = 400, description = "Rejected calculation", body = ErrorResponse),
        (status = 413, description = "Body over the size limit", body = ErrorResponse),
        (status = 500, description = "Unexpected fault", body = ErrorResponse),
    )
)]
pub async fn calculate(
    Extension(service): Extension<Arc<Service>>,
    payload: Payload,
) -> Result<Json<CalculateResponse>, RestError> {
    evaluate_payload(&service, payload)
}

/// Handler for POST /api/calculator
///
/// Pages-style route: any other method is answered by [`method_not_allowed`].
#[utoipa::path(
    post,
    path = "/api/calculator",
    tag = "calculator",
    request_body = CalculateRequest,
    responses(
        (status = 200, description = "Calculation result", body = CalculateResponse),
        (status = 400, description = "Rejected calculation", body = ErrorResponse),
        (status = 413, description = "Body over the size limit", body = ErrorResponse),
        (status = 405, description = "Method other than POST", body = ErrorResponse),
        (status = 500, description = "Unexpected fault", body = ErrorResponse),
    )
)]
pub async fn calculate_legacy(
    Extension(service): Extension<Arc<Service>>,
    payload: Payload,
) -> Result<Json<CalculateResponse>, RestError> {
    evaluate_payload(&service, payload)
}

pub async fn method_not_allowed() -> RestError {
    RestError::MethodNotAllowed
}

/// Handler for GET /health
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_owned(),
    })
}
