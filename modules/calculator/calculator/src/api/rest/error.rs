use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use calculator_sdk::{CalculatorError, ErrorClass};
use http::StatusCode;

use super::dto::ErrorResponse;

/// Everything a calculator route can fail with, rendered as `{ "error": "..." }`.
#[derive(thiserror::Error, Debug)]
pub enum RestError {
    #[error(transparent)]
    Calculation(#[from] CalculatorError),

    /// Body was not valid JSON for the request DTO.
    #[error("Invalid input")]
    MalformedBody(#[source] JsonRejection),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Payload too large")]
    PayloadTooLarge,

    #[error("Request timed out")]
    Timeout,
}

impl From<JsonRejection> for RestError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge
        } else {
            Self::MalformedBody(rejection)
        }
    }
}

impl RestError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Calculation(e) => match e.class() {
                ErrorClass::ClientError => StatusCode::BAD_REQUEST,
                ErrorClass::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

/// Map a rest error to its JSON body, logging by severity.
#[must_use]
pub fn rest_error_to_response(e: &RestError) -> Response {
    let status = e.status();
    match e {
        RestError::Calculation(CalculatorError::Internal(detail)) => {
            tracing::error!(detail = %detail, "Calculation failed unexpectedly");
        }
        RestError::Calculation(err) => {
            tracing::debug!(code = err.code(), error = %err, "Calculation rejected");
        }
        RestError::MalformedBody(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Rejected malformed request body");
        }
        RestError::MethodNotAllowed => {
            tracing::debug!("Method not allowed on calculator route");
        }
        RestError::PayloadTooLarge => {
            tracing::warn!("Rejected request body over the size limit");
        }
        RestError::Timeout => {
            tracing::warn!("Request timed out");
        }
    }

    let body = ErrorResponse {
        error: e.to_string(),
    };
    (status, Json(body)).into_response()
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        rest_error_to_response(&self)
    }
}
