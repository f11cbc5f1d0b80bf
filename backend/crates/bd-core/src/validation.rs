//! Sprint submission validation
//!
//! Rules run in a fixed order and the first failing rule decides the error.
//! The payload arrives as raw JSON so that type mismatches (a string where a
//! number belongs, an object where an array belongs) are reported by the
//! rule that owns the field rather than by the deserializer.

use crate::{CoreError, CoreResult, SprintSubmission};

use serde_json::Value;

pub const FIELD_TOTAL_POINTS: &str = "totalPoints";
pub const FIELD_SPRINT_DURATION: &str = "sprintDuration";
pub const FIELD_DAILY_PROGRESS: &str = "dailyProgress";

pub const MSG_REQUIRED: &str = "Total points and sprint duration are required";
pub const MSG_TOTAL_POINTS: &str = "Total points must be a positive number";
pub const MSG_SPRINT_DURATION: &str = "Sprint duration must be a positive integer";
pub const MSG_PROGRESS_NOT_ARRAY: &str = "Daily progress must be an array";
pub const MSG_PROGRESS_NEGATIVE: &str = "Daily progress values must be non-negative numbers";
pub const MSG_PROGRESS_TOO_LONG: &str = "Daily progress entries cannot exceed sprint duration";

/// Validate an untrusted sprint payload.
///
/// The accepted values are returned as sent; nothing is coerced.
#[track_caller]
pub fn validate_submission(body: &Value) -> CoreResult<SprintSubmission> {
    let total_points = body.get(FIELD_TOTAL_POINTS);
    let sprint_duration = body.get(FIELD_SPRINT_DURATION);
    let daily_progress = body.get(FIELD_DAILY_PROGRESS);

    // 1. Required fields
    if !is_truthy(total_points) {
        return Err(CoreError::validation(MSG_REQUIRED, Some(FIELD_TOTAL_POINTS)));
    }
    if !is_truthy(sprint_duration) {
        return Err(CoreError::validation(
            MSG_REQUIRED,
            Some(FIELD_SPRINT_DURATION),
        ));
    }

    // 2. Total points
    let total_points = total_points
        .and_then(Value::as_f64)
        .filter(|points| *points > 0.0)
        .ok_or_else(|| CoreError::validation(MSG_TOTAL_POINTS, Some(FIELD_TOTAL_POINTS)))?;

    // 3. Sprint duration
    let sprint_duration = sprint_duration
        .and_then(Value::as_f64)
        .and_then(positive_integer)
        .ok_or_else(|| CoreError::validation(MSG_SPRINT_DURATION, Some(FIELD_SPRINT_DURATION)))?;

    // 4-6. Daily progress, only when supplied
    let daily_progress = if is_truthy(daily_progress) {
        let entries = daily_progress.and_then(Value::as_array).ok_or_else(|| {
            CoreError::validation(MSG_PROGRESS_NOT_ARRAY, Some(FIELD_DAILY_PROGRESS))
        })?;

        let values = entries
            .iter()
            .map(|entry| entry.as_f64().filter(|value| *value >= 0.0))
            .collect::<Option<Vec<f64>>>()
            .ok_or_else(|| {
                CoreError::validation(MSG_PROGRESS_NEGATIVE, Some(FIELD_DAILY_PROGRESS))
            })?;

        ensure_progress_fits(values.len(), sprint_duration)?;
        Some(values)
    } else {
        None
    };

    Ok(SprintSubmission {
        total_points,
        sprint_duration,
        daily_progress,
    })
}

/// Reject progress sequences longer than the sprint itself
#[track_caller]
pub fn ensure_progress_fits(entries: usize, sprint_duration: u32) -> CoreResult<()> {
    if entries > sprint_duration as usize {
        return Err(CoreError::validation(
            MSG_PROGRESS_TOO_LONG,
            Some(FIELD_DAILY_PROGRESS),
        ));
    }
    Ok(())
}

/// JSON truthiness: missing, `null`, `false`, `0` and `""` are all "not supplied"
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

fn positive_integer(value: f64) -> Option<u32> {
    if value > 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Some(value as u32)
    } else {
        None
    }
}
