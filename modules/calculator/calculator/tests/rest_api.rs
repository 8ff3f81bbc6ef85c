#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]

//! End-to-end tests for the calculator REST routes.
//!
//! Requests are driven through the real router with `tower::ServiceExt::oneshot`.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use calculator::{CalculatorConfig, CalculatorModule};
use serde_json::{Value, json};
use tower::ServiceExt as _;

const ROUTES: [&str; 2] = ["/api/calculate", "/api/calculator"];

fn app() -> Router {
    CalculatorModule::default().register_rest(Router::new())
}

fn app_with(config: CalculatorConfig) -> Router {
    CalculatorModule::new(config).register_rest(Router::new())
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn post(uri: &str, body: &Value) -> (StatusCode, Value) {
    send(app(), post_json(uri, body)).await
}

#[tokio::test]
async fn test_division_scenario() {
    for uri in ROUTES {
        let (status, body) = post(
            uri,
            &json!({"num1": 6, "num2": 3, "operation": "/", "mode": "normal"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, json!({"result": 2.0}), "{uri}");
    }
}

#[tokio::test]
async fn test_division_by_zero_scenario() {
    for uri in ROUTES {
        let (status, body) = post(
            uri,
            &json!({"num1": 5, "num2": 0, "operation": "/", "mode": "normal"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body, json!({"error": "Division by zero"}), "{uri}");
    }
}

#[tokio::test]
async fn test_log_scenarios() {
    for uri in ROUTES {
        let (status, body) = post(
            uri,
            &json!({"num1": 100, "operation": "log", "mode": "scientific"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"].as_f64(), Some(2.0));

        let (status, body) = post(
            uri,
            &json!({"num1": -1, "operation": "log", "mode": "scientific"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Log of non-positive number");
    }
}

#[tokio::test]
async fn test_zero_operand_is_accepted() {
    let (status, body) = post(
        "/api/calculate",
        &json!({"num1": 0, "num2": 5, "operation": "+", "mode": "normal"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"].as_f64(), Some(5.0));
}

#[tokio::test]
async fn test_missing_fields_are_invalid_input() {
    let cases = [
        json!({"num2": 3, "operation": "+", "mode": "normal"}),
        json!({"num1": 3, "operation": "+", "mode": "normal"}),
        json!({"num1": 3, "num2": 3, "mode": "normal"}),
        json!({"num1": 3, "num2": 3, "operation": "+"}),
        json!({"num1": null, "operation": "sin", "mode": "scientific"}),
        json!({"num1": 3, "num2": 3, "operation": "%"}),
    ];
    for case in cases {
        let (status, body) = post("/api/calculate", &case).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{case}");
        assert_eq!(body["error"], "Invalid input", "{case}");
    }
}

#[tokio::test]
async fn test_bad_operator_messages_depend_on_mode() {
    let (status, body) = post(
        "/api/calculate",
        &json!({"num1": 2, "num2": 3, "operation": "^", "mode": "normal"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid operation");

    let (status, body) = post(
        "/api/calculate",
        &json!({"num1": 2, "operation": "sqrt", "mode": "scientific"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid scientific operation");
}

#[tokio::test]
async fn test_malformed_bodies_are_invalid_input() {
    let wrong_type = post_json(
        "/api/calculate",
        &json!({"num1": "6", "num2": 3, "operation": "/", "mode": "normal"}),
    );
    let (status, body) = send(app(), wrong_type).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid input");

    let not_json = Request::builder()
        .method("POST")
        .uri("/api/calculator")
        .header("content-type", "application/json")
        .body(Body::from("{num1: 6"))
        .unwrap();
    let (status, body) = send(app(), not_json).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid input");

    let no_content_type = Request::builder()
        .method("POST")
        .uri("/api/calculate")
        .body(Body::from(r#"{"num1":1,"num2":2,"operation":"+","mode":"normal"}"#))
        .unwrap();
    let (status, body) = send(app(), no_content_type).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid input");
}

#[tokio::test]
async fn test_both_routes_agree() {
    let cases = [
        json!({"num1": 1.5, "num2": 2.25, "operation": "*", "mode": "normal"}),
        json!({"num1": 0.5, "operation": "cos", "mode": "scientific"}),
        json!({"num1": 1, "num2": 0, "operation": "/", "mode": "normal"}),
        json!({"num1": 1, "operation": "+", "mode": "scientific"}),
    ];
    for case in cases {
        let modern = post("/api/calculate", &case).await;
        let legacy = post("/api/calculator", &case).await;
        assert_eq!(modern, legacy, "{case}");
    }
}

#[tokio::test]
async fn test_legacy_route_answers_other_methods_with_json_405() {
    let request = Request::builder()
        .method("GET")
        .uri("/api/calculator")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({"error": "Method not allowed"}));
}

#[tokio::test]
async fn test_calculate_route_rejects_other_methods() {
    let request = Request::builder()
        .method("GET")
        .uri("/api/calculate")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_legacy_route_can_be_disabled() {
    let router = app_with(CalculatorConfig {
        enable_legacy_route: false,
        ..CalculatorConfig::default()
    });
    let request = post_json(
        "/api/calculator",
        &json!({"num1": 1, "num2": 2, "operation": "+", "mode": "normal"}),
    );
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_scientific_mode_can_be_disabled() {
    let router = app_with(CalculatorConfig {
        enable_scientific: false,
        ..CalculatorConfig::default()
    });
    let request = post_json(
        "/api/calculate",
        &json!({"num1": 0, "operation": "sin", "mode": "scientific"}),
    );
    let (status, body) = send(router, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid scientific operation");
}

#[tokio::test]
async fn test_overflow_serializes_as_null() {
    let (status, body) = post(
        "/api/calculate",
        &json!({"num1": 1e308, "num2": 10, "operation": "*", "mode": "normal"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"result": null}));
}

#[tokio::test]
async fn test_health_and_openapi() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let request = Request::builder()
        .uri("/openapi.json")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/calculate"]["post"].is_object());

    let request = Request::builder()
        .uri("/healthz")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"ok");
}
