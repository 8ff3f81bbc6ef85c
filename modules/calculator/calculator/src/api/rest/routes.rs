//! Route registration for the calculator module

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Router};

use crate::config::CalculatorConfig;
use crate::domain::Service;

use super::{handlers, openapi};

/// Register all REST routes for the calculator module.
///
/// # Arguments
/// * `router` - Axum router to add routes to
/// * `service` - Domain Service shared by every calculation route
/// * `config` - Module configuration (controls the legacy route)
#[must_use]
pub fn register_routes(
    router: Router,
    service: Arc<Service>,
    config: &CalculatorConfig,
) -> Router {
    // POST /api/calculate - route-handler convention, other methods get axum's bare 405
    let mut router = router.route("/api/calculate", post(handlers::calculate));

    // POST /api/calculator - pages-style convention, other methods get a JSON 405
    if config.enable_legacy_route {
        router = router.route(
            "/api/calculator",
            post(handlers::calculate_legacy).fallback(handlers::method_not_allowed),
        );
    } else {
        tracing::info!("Legacy /api/calculator route disabled by configuration");
    }

    router
        .route("/health", get(handlers::health_check))
        .route("/healthz", get(|| async { "ok" }))
        .route("/openapi.json", get(openapi::openapi_json))
        .layer(Extension(service))
}
