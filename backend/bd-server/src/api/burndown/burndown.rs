//! Synthetic burndown data handler

use crate::{ApiError, ApiResponse, ApiResult, AppState, SampleDefaults, SampleQuery};

use bd_core::{BurndownTestData, SampleRequest, Scenario, burndown_test_data};

use std::str::FromStr;

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// GET /api/burndown/sample
///
/// Generate an ideal line, a synthetic actual line and its metrics
pub async fn sample_burndown(
    State(state): State<AppState>,
    query: Result<Query<SampleQuery>, QueryRejection>,
) -> ApiResult<Json<ApiResponse<BurndownTestData>>> {
    let Query(query) = query?;
    let request = resolve_sample_request(&query, &state.sample)?;

    let mut rng = match query.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let data = burndown_test_data(&request, &mut rng)?;

    log::debug!(
        "Generated {} sample: {} points over {} days",
        request.scenario,
        request.total_points,
        request.duration_days
    );

    Ok(Json(ApiResponse::ok(data)))
}

/// Fill missing query values from the defaults and bound the rest
pub fn resolve_sample_request(
    query: &SampleQuery,
    defaults: &SampleDefaults,
) -> ApiResult<SampleRequest> {
    let total_points = query.total_points.unwrap_or(defaults.request.total_points);
    if !total_points.is_finite() || total_points <= 0.0 {
        return Err(ApiError::validation(
            "Total points must be a positive number",
            Some("totalPoints"),
        ));
    }

    let duration_days = query
        .duration_days
        .unwrap_or(defaults.request.duration_days);
    if duration_days == 0 || duration_days > defaults.max_duration_days {
        return Err(ApiError::validation(
            format!(
                "Duration must be between 1 and {} days",
                defaults.max_duration_days
            ),
            Some("durationDays"),
        ));
    }

    let scenario = match query.scenario {
        Some(ref name) => Scenario::from_str(name).unwrap_or_default(),
        None => defaults.request.scenario,
    };

    Ok(SampleRequest {
        total_points,
        duration_days,
        scenario,
    })
}
