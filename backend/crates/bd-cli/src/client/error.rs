use bd_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::Value;
use thiserror::Error;

pub const MSG_API_FALLBACK: &str = "API request failed";
pub const MSG_NETWORK: &str = "Network error";
pub const MSG_UNEXPECTED: &str = "An unexpected error occurred";

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ClientError {
    /// The server answered with a non-success status
    #[error("API error {status}: {message} {location}")]
    Api {
        status: u16,
        message: String,
        /// Parsed error body, if the server sent JSON
        data: Option<Value>,
        location: ErrorLocation,
    },

    /// The request never produced a response
    #[error("Network error: {message} {location}")]
    Network {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    /// Input rejected before sending
    #[error("Invalid input: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Build an API error from a failed response.
    ///
    /// Message priority: body `message`, then the status reason phrase,
    /// then a generic fallback.
    #[track_caller]
    pub fn from_response(status: u16, reason: Option<&str>, data: Option<Value>) -> Self {
        let message = data
            .as_ref()
            .and_then(|body| body.get("message"))
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
            .or(reason.filter(|reason| !reason.is_empty()))
            .unwrap_or(MSG_API_FALLBACK)
            .to_string();

        ClientError::Api {
            status,
            message,
            data,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: Option<&str>) -> Self {
        ClientError::Validation {
            message: message.into(),
            field: field.map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// HTTP status for API errors, 0 when no response arrived
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Network { .. } => Some(0),
            ClientError::Json { .. } | ClientError::Validation { .. } => None,
        }
    }
}

/// Render an error for display to the user
pub fn format_error_message(error: &ClientError) -> String {
    let message = match error {
        ClientError::Api {
            status, message, ..
        } => return format!("Error {}: {}", status, message),
        ClientError::Network { .. } => return format!("Error 0: {}", MSG_NETWORK),
        ClientError::Json { message, .. } | ClientError::Validation { message, .. } => message,
    };

    if message.is_empty() {
        MSG_UNEXPECTED.to_string()
    } else {
        message.clone()
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::Network {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

impl From<CoreError> for ClientError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        ClientError::Validation {
            message: err.message().to_string(),
            field: err.field().map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
