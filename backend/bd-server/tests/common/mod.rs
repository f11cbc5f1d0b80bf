#![allow(dead_code)]

//! Test infrastructure for bd-server API tests

use bd_config::IdStrategy;
use bd_server::app_state::store_for;
use bd_server::{AppState, SampleDefaults};

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

/// AppState with sequential ids ("1", "2", ...) and default sample settings
pub fn create_test_app_state() -> AppState {
    AppState::new(store_for(IdStrategy::Sequential), SampleDefaults::default())
}

pub fn valid_sprint_body() -> Value {
    json!({
        "totalPoints": 100,
        "sprintDuration": 10,
        "dailyProgress": [20, 15, 10, 5]
    })
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Send one request through a clone of the router
pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

/// POST the valid body and return the created record's id
pub async fn create_sprint(app: &Router) -> String {
    let response = send(app, json_request("POST", "/api/sprint", &valid_sprint_body())).await;
    let json = body_json(response).await;
    json["data"]["id"].as_str().unwrap().to_string()
}
