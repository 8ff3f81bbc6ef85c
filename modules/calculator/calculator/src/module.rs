//! Calculator module definition
//!
//! Owns the domain `Service` and hands it out to the REST layer and to
//! in-process consumers.

use std::sync::Arc;

use axum::Router;
use calculator_sdk::CalculatorClientV1;

use crate::api::rest::routes;
use crate::config::CalculatorConfig;
use crate::domain::{CalculatorLocalClient, Service, ServiceConfig};

/// Calculator module.
pub struct CalculatorModule {
    config: CalculatorConfig,
    service: Arc<Service>,
}

impl Default for CalculatorModule {
    fn default() -> Self {
        Self::new(CalculatorConfig::default())
    }
}

impl CalculatorModule {
    #[must_use]
    pub fn new(config: CalculatorConfig) -> Self {
        tracing::info!(
            enable_scientific = config.enable_scientific,
            enable_legacy_route = config.enable_legacy_route,
            "Initializing calculator module"
        );
        let service = Arc::new(Service::new(ServiceConfig::from(&config)));
        Self { config, service }
    }

    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    #[must_use]
    pub fn service(&self) -> Arc<Service> {
        Arc::clone(&self.service)
    }

    /// In-process client backed by this module's `Service`.
    #[must_use]
    pub fn client(&self) -> Arc<dyn CalculatorClientV1> {
        Arc::new(CalculatorLocalClient::new(self.service()))
    }

    /// Add the calculator REST routes to `router`.
    #[must_use]
    pub fn register_rest(&self, router: Router) -> Router {
        tracing::info!("Registering calculator REST routes");
        let router = routes::register_routes(router, self.service(), &self.config);
        tracing::info!("Calculator REST routes registered");
        router
    }
}
