//! Integration tests for the health endpoint and cross-cutting layers
mod common;

use crate::common::{body_json, create_test_app_state, empty_request, send};

use axum::{
    body::Body,
    http::{Request, StatusCode},
};

use bd_server::build_router;

#[tokio::test]
async fn test_health_returns_ok_status() {
    let app = build_router(create_test_app_state());

    let response = send(&app, empty_request("GET", "/api/health")).await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "OK");
    assert_eq!(json["message"], "Server is running");
}

#[tokio::test]
async fn test_health_allows_any_origin() {
    let app = build_router(create_test_app_state());

    let request = Request::builder()
        .method("GET")
        .uri("/api/health")
        .header("origin", "http://localhost:3000")
        .body(Body::empty())
        .unwrap();

    let response = send(&app, request).await;

    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_preflight_is_answered() {
    let app = build_router(create_test_app_state());

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/sprint")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();

    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("access-control-allow-methods"));
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let app = build_router(create_test_app_state());

    let response = send(&app, empty_request("GET", "/api/nope")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
