//! HTTP host: middleware stack, listener and graceful shutdown.

use std::any::Any;

use anyhow::{Context, Result};
use axum::Router;
use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue, Request, StatusCode, header};
use axum::middleware;
use axum::response::{IntoResponse, Response};
use calculator::CalculatorModule;
use calculator::api::rest::error::RestError;
use calculator_sdk::CalculatorError;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::{AppConfig, ServerConfig};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone, Copy, Default)]
struct MakeReqId;

impl MakeRequestId for MakeReqId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&uuid::Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Build the full application router: calculator routes wrapped in the middleware stack.
#[must_use]
pub fn build_router(config: &AppConfig) -> Router {
    let module = CalculatorModule::new(config.calculator.clone());
    let router = module.register_rest(Router::new());
    apply_middleware_stack(router, &config.server)
}

/// Layer registration order (reverse of execution): innermost -> outermost
/// Runtime execution order (outermost -> innermost):
///   1. `SetRequestId`       - Generate/extract request ID
///   2. `PropagateRequestId` - Copy request ID to response headers
///   3. Trace                - Per-request span and access log
///   4. `JsonErrors`         - Plain-text 413/504 bodies become `{"error": ...}`
///   5. Timeout              - 504 after `request_timeout`
///   6. `BodyLimit`          - Reject oversized bodies
///   7. CORS                 - Cross-origin resource sharing (if enabled)
///   8. `CatchPanic`         - Panics become a 500 `{"error":"Server error"}`
///   9. Router               - Route to handler (innermost)
#[must_use]
pub fn apply_middleware_stack(mut router: Router, cfg: &ServerConfig) -> Router {
    // 8) Panic guard
    router = router.layer(CatchPanicLayer::custom(panic_response));

    // 7) CORS
    if cfg.cors_enabled {
        router = router.layer(build_cors_layer(cfg));
    }

    // 6) Body limit
    router = router.layer(RequestBodyLimitLayer::new(cfg.body_limit_bytes));
    router = router.layer(DefaultBodyLimit::max(cfg.body_limit_bytes));

    // 5) Timeout
    router = router.layer(TimeoutLayer::with_status_code(
        StatusCode::GATEWAY_TIMEOUT,
        cfg.request_timeout,
    ));

    // 4) JSON error bodies for responses produced by the layers above
    router = router.layer(middleware::map_response(json_error_body));

    // 3) Trace
    router = router.layer(TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
        let request_id = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        tracing::info_span!(
            "http_request",
            method = %req.method(),
            path = %req.uri().path(),
            request_id = %request_id,
        )
    }));

    // 2) PropagateRequestId
    let x_request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    router = router.layer(PropagateRequestIdLayer::new(x_request_id.clone()));

    // 1) SetRequestId (registered last, runs first - outermost layer)
    router.layer(SetRequestIdLayer::new(x_request_id, MakeReqId))
}

/// Rewrite non-JSON 413/504 responses from tower-http into the `{"error": ...}` shape.
async fn json_error_body(response: Response) -> Response {
    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .is_some_and(|v| v.as_bytes().starts_with(b"application/json"));
    if is_json {
        return response;
    }

    match response.status() {
        StatusCode::PAYLOAD_TOO_LARGE => RestError::PayloadTooLarge.into_response(),
        StatusCode::GATEWAY_TIMEOUT => RestError::Timeout.into_response(),
        _ => response,
    }
}

#[allow(clippy::needless_pass_by_value)] // CatchPanicLayer hands over the payload by value
fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    RestError::from(CalculatorError::internal(detail)).into_response()
}

fn build_cors_layer(cfg: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    if cfg.cors_allowed_origins.iter().any(|o| o == "*") {
        warn!(
            "CORS is configured with allowed_origins=['*']. \
             Consider specifying explicit origins for production deployments."
        );
        return layer.allow_origin(AnyOrigin);
    }

    let origins: Vec<HeaderValue> = cfg
        .cors_allowed_origins
        .iter()
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();
    layer.allow_origin(origins)
}

/// Bind, serve until `cancel` fires, then drain in-flight requests.
///
/// # Errors
/// Returns an error if the bind address is invalid, the socket cannot be bound,
/// or the server fails while running.
pub async fn serve(config: &AppConfig, cancel: CancellationToken) -> Result<()> {
    let addr = config.server.socket_addr()?;
    let router = build_router(config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("HTTP server bound on {addr}");

    let shutdown = async move {
        cancel.cancelled().await;
        tracing::info!("HTTP server shutting down gracefully (cancellation)");
    };

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!(e))
}

/// Cancel `token` on Ctrl+C or SIGTERM.
pub fn cancel_on_signals(token: CancellationToken) {
    tokio::spawn(async move {
        match wait_for_shutdown().await {
            Ok(()) => tracing::info!("Shutdown signal received, initiating graceful shutdown"),
            Err(e) => tracing::error!(error = %e, "Signal handling failed; shutting down"),
        }
        token.cancel();
    });
}

async fn wait_for_shutdown() -> Result<()> {
    tokio::select! {
        result = signal::ctrl_c() => {
            result.context("failed to listen for Ctrl+C")?;
            tracing::info!("Received Ctrl+C signal");
        }
        result = wait_sigterm() => result?,
    }
    Ok(())
}

#[cfg(unix)]
async fn wait_sigterm() -> Result<()> {
    let mut handler = signal::unix::signal(signal::unix::SignalKind::terminate())
        .context("failed to install SIGTERM handler")?;
    handler.recv().await;
    tracing::info!("Received SIGTERM signal");
    Ok(())
}

#[cfg(not(unix))]
async fn wait_sigterm() -> Result<()> {
    std::future::pending::<Result<()>>().await
}
