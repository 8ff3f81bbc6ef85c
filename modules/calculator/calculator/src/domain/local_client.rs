//! Local client implementation of `CalculatorClientV1`.

use std::sync::Arc;

use async_trait::async_trait;
use calculator_sdk::{CalculationRequest, CalculatorClientV1, CalculatorError};

use super::service::Service;

/// Local client that delegates to the module's `Service`.
pub struct CalculatorLocalClient {
    service: Arc<Service>,
}

impl CalculatorLocalClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl CalculatorClientV1 for CalculatorLocalClient {
    async fn evaluate(&self, request: CalculationRequest) -> Result<f64, CalculatorError> {
        self.service.evaluate(&request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn delegates_to_service() {
        let client: Arc<dyn CalculatorClientV1> =
            Arc::new(CalculatorLocalClient::new(Arc::new(Service::default())));

        let quotient = client
            .evaluate(CalculationRequest::normal(6.0, 3.0, "/"))
            .await
            .unwrap();
        assert!((quotient - 2.0).abs() < f64::EPSILON);

        let err = client
            .evaluate(CalculationRequest::scientific(-1.0, "log"))
            .await
            .unwrap_err();
        assert_eq!(err, CalculatorError::NonPositiveLogArgument);
    }
}
