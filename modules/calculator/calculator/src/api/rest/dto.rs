//! REST DTOs for the calculator module
//!
//! These types are transport-specific (serde + utoipa for REST/OpenAPI).

use calculator_sdk::{CalculationRequest, CalculatorError, Mode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Calculation request body.
///
/// Every field is optional on the wire so that absence is reported as
/// `Invalid input` by the evaluator instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CalculateRequest {
    /// First operand (the only operand in scientific mode)
    pub num1: Option<f64>,
    /// Second operand, required in normal mode
    pub num2: Option<f64>,
    /// `+ - * /` in normal mode, `sin cos tan log` in scientific mode
    pub operation: Option<String>,
    /// `normal` or `scientific`
    pub mode: Option<String>,
}

impl TryFrom<CalculateRequest> for CalculationRequest {
    type Error = CalculatorError;

    fn try_from(dto: CalculateRequest) -> Result<Self, Self::Error> {
        let mode = dto
            .mode
            .as_deref()
            .ok_or(CalculatorError::InvalidInput)?
            .parse::<Mode>()?;

        Ok(Self {
            operand1: dto.num1,
            operand2: dto.num2,
            operator: dto.operation,
            mode,
        })
    }
}

/// Successful calculation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalculateResponse {
    /// Unrounded result
    pub result: f64,
}

/// Failed calculation; `error` is safe to show to end users verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}
