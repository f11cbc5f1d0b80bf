//! REST API error types
//!
//! Every failure is rendered as `{success: false, message}`; internal errors
//! also carry an `error` detail.

use bd_core::CoreError;
use bd_store::StoreError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const MSG_SPRINT_NOT_FOUND: &str = "Sprint not found";
pub const MSG_SERVER_ERROR: &str = "Server error";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client input violated a rule (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: Option<&str>) -> Self {
        ApiError::Validation {
            message: message.into(),
            field: field.map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn sprint_not_found() -> Self {
        ApiError::NotFound {
            message: MSG_SPRINT_NOT_FOUND.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let body = match self {
            ApiError::Validation { message, .. } | ApiError::NotFound { message, .. } => {
                ApiErrorResponse {
                    success: false,
                    message,
                    error: None,
                }
            }
            ApiError::Internal { message, .. } => ApiErrorResponse {
                success: false,
                message: MSG_SERVER_ERROR.to_string(),
                error: Some(message),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Convert rule violations to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert store errors to API errors
impl From<StoreError> for ApiError {
    #[track_caller]
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { .. } => ApiError::NotFound {
                message: MSG_SPRINT_NOT_FOUND.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            StoreError::Invariant { source, .. } => ApiError::Validation {
                message: source.message().to_string(),
                field: source.field().map(String::from),
                location: ErrorLocation::from(Location::caller()),
            },
            StoreError::DuplicateId { .. } => ApiError::Internal {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Malformed request bodies are client errors
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(e: JsonRejection) -> Self {
        ApiError::Validation {
            message: format!("Invalid JSON body: {}", e.body_text()),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Malformed query strings are client errors
impl From<QueryRejection> for ApiError {
    #[track_caller]
    fn from(e: QueryRejection) -> Self {
        ApiError::Validation {
            message: format!("Invalid query string: {}", e.body_text()),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
