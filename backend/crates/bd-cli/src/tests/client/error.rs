use crate::{ClientError, format_error_message};

use serde_json::json;

#[test]
fn test_api_error_prefers_body_message() {
    let error = ClientError::from_response(
        400,
        Some("Bad Request"),
        Some(json!({ "success": false, "message": "Total points must be a positive number" })),
    );

    assert_eq!(
        format_error_message(&error),
        "Error 400: Total points must be a positive number"
    );
    assert_eq!(error.status(), Some(400));
}

#[test]
fn test_api_error_falls_back_to_reason_phrase() {
    let error = ClientError::from_response(502, Some("Bad Gateway"), None);

    assert_eq!(format_error_message(&error), "Error 502: Bad Gateway");
}

#[test]
fn test_api_error_body_without_message_uses_reason_phrase() {
    let error = ClientError::from_response(404, Some("Not Found"), Some(json!({ "success": false })));

    assert_eq!(format_error_message(&error), "Error 404: Not Found");
}

#[test]
fn test_api_error_without_message_or_reason_uses_fallback() {
    let error = ClientError::from_response(599, None, None);

    assert_eq!(format_error_message(&error), "Error 599: API request failed");
}

#[test]
fn test_api_error_keeps_body_as_data() {
    let body = json!({ "success": false, "message": "Sprint not found" });

    let error = ClientError::from_response(404, Some("Not Found"), Some(body.clone()));

    match error {
        ClientError::Api { data, .. } => assert_eq!(data, Some(body)),
        _ => panic!("Expected Api error"),
    }
}

#[test]
fn test_validation_error_formats_as_plain_message() {
    let error = ClientError::validation("Sprint duration must be a positive integer", None);

    assert_eq!(
        format_error_message(&error),
        "Sprint duration must be a positive integer"
    );
    assert_eq!(error.status(), None);
}

#[test]
fn test_empty_message_formats_as_unexpected() {
    let error = ClientError::validation("", None);

    assert_eq!(format_error_message(&error), "An unexpected error occurred");
}

#[test]
fn test_json_error_formats_with_parser_message() {
    let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let error = ClientError::from(source);

    assert!(!format_error_message(&error).is_empty());
    assert!(matches!(error, ClientError::Json { .. }));
}
