//! `CalculatorClientV1` trait definition.
//!
//! This trait defines the public API for the calculator module (Version 1).

use async_trait::async_trait;

use crate::errors::CalculatorError;
use crate::models::CalculationRequest;

/// Public API trait for the calculator module (Version 1).
///
/// Implemented in-process by the module's local client:
/// ```ignore
/// let calculator = module.client();
/// let result = calculator.evaluate(CalculationRequest::scientific(100.0, "log")).await?;
/// ```
#[async_trait]
pub trait CalculatorClientV1: Send + Sync {
    /// Validate and evaluate a single calculation.
    ///
    /// Every error is terminal for the request; nothing is retried.
    async fn evaluate(&self, request: CalculationRequest) -> Result<f64, CalculatorError>;
}
