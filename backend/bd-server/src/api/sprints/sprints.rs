//! Sprint REST API handlers

use crate::{ApiError, ApiResponse, ApiResult, AppState, MessageResponse};

use bd_core::{SprintBurndown, SprintPatch, SprintRecord, validate_submission};

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::{Map, Value};

pub const MSG_CREATED: &str = "Sprint data submitted successfully";
pub const MSG_UPDATED: &str = "Sprint data updated successfully";
pub const MSG_DELETED: &str = "Sprint deleted successfully";

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/sprint
///
/// Validate and store a new sprint
pub async fn create_sprint(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ApiResponse<SprintRecord>>)> {
    let body = submitted_body(body)?;
    let submission = validate_submission(&body)?;

    let record = state.store.create(submission).await?;

    log::info!(
        "Created sprint {} ({} points over {} days)",
        record.id,
        record.total_points,
        record.sprint_duration
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(MSG_CREATED, record)),
    ))
}

/// GET /api/sprints
///
/// List every stored sprint in creation order
pub async fn list_sprints(State(state): State<AppState>) -> Json<ApiResponse<Vec<SprintRecord>>> {
    Json(ApiResponse::ok(state.store.list().await))
}

/// GET /api/sprint/{id}
pub async fn get_sprint(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<SprintRecord>>> {
    let record = state.store.get(&id).await?;

    Ok(Json(ApiResponse::ok(record)))
}

/// PUT /api/sprint/{id}
///
/// Runs the same rules as create, then merges the submission over the
/// stored record. Progress left out of the body keeps its stored value.
pub async fn update_sprint(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<ApiResponse<SprintRecord>>> {
    let body = submitted_body(body)?;
    let patch = SprintPatch::from(validate_submission(&body)?);

    let record = state.store.update(&id, &patch).await?;

    log::info!("Updated sprint {}", record.id);

    Ok(Json(ApiResponse::with_message(MSG_UPDATED, record)))
}

/// DELETE /api/sprint/{id}
pub async fn delete_sprint(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    if !state.store.delete(&id).await {
        return Err(ApiError::sprint_not_found());
    }

    log::info!("Deleted sprint {}", id);

    Ok(Json(MessageResponse::new(MSG_DELETED)))
}

/// GET /api/sprint/{id}/burndown
///
/// Ideal line, actual line, chart rows and metrics for a stored sprint
pub async fn get_sprint_burndown(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<SprintBurndown>>> {
    let record = state.store.get(&id).await?;
    let burndown = SprintBurndown::for_record(&record)?;

    Ok(Json(ApiResponse::ok(burndown)))
}

/// Unwrap a JSON body. A request with no JSON content type is read as an
/// empty object so it fails on the required-field rule.
fn submitted_body(body: Result<Json<Value>, JsonRejection>) -> ApiResult<Value> {
    match body {
        Ok(Json(body)) => Ok(body),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(Value::Object(Map::new())),
        Err(rejection) => Err(rejection.into()),
    }
}
