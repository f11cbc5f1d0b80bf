use crate::ApiError;

use bd_core::{CoreError, validate_submission};
use bd_store::StoreError;

use std::panic::Location;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http_body_util::BodyExt;
use serde_json::json;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_envelope() {
    let (status, json) = body_json(ApiError::sprint_not_found()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Sprint not found");
    assert!(json.get("error").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_message() {
    let error = ApiError::validation("Daily progress must be an array", Some("dailyProgress"));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Daily progress must be an array");
}

#[tokio::test]
async fn test_internal_error_returns_500_with_detail() {
    let error = ApiError::Internal {
        message: "id collision".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Server error");
    assert_eq!(json["error"], "id collision");
}

#[test]
fn test_core_error_converts_to_validation() {
    let core_err = validate_submission(&json!({ "totalPoints": -10, "sprintDuration": 5 }))
        .unwrap_err();
    let api_err: ApiError = core_err.into();

    match api_err {
        ApiError::Validation { message, field, .. } => {
            assert_eq!(message, "Total points must be a positive number");
            assert_eq!(field.as_deref(), Some("totalPoints"));
        }
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_store_not_found_converts_to_not_found() {
    let api_err: ApiError = StoreError::not_found("42").into();

    assert_eq!(api_err.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_store_invariant_converts_to_validation() {
    let store_err = StoreError::from(CoreError::validation(
        "Daily progress entries cannot exceed sprint duration",
        Some("dailyProgress"),
    ));
    let api_err: ApiError = store_err.into();

    match api_err {
        ApiError::Validation { message, .. } => {
            assert_eq!(message, "Daily progress entries cannot exceed sprint duration");
        }
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_store_duplicate_id_converts_to_internal() {
    let store_err = StoreError::DuplicateId {
        id: "7".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = store_err.into();

    assert_eq!(api_err.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
