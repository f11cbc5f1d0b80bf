use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /api/health - Liveness check
pub async fn health_check() -> Response {
    let health = json!({
        "status": "OK",
        "message": "Server is running",
    });

    (StatusCode::OK, Json(health)).into_response()
}
