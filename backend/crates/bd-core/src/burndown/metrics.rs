use super::round_half_up;
use crate::validation::{FIELD_TOTAL_POINTS, MSG_TOTAL_POINTS};
use crate::{BurndownPoint, CoreError, CoreResult, SprintMetrics};

/// Derive sprint metrics from the last point of a burndown series
pub fn sprint_metrics(series: &[BurndownPoint], total_points: f64) -> CoreResult<SprintMetrics> {
    if !total_points.is_finite() || total_points <= 0.0 {
        return Err(CoreError::validation(
            MSG_TOTAL_POINTS,
            Some(FIELD_TOTAL_POINTS),
        ));
    }

    let last = series
        .last()
        .ok_or_else(|| CoreError::validation("Burndown series cannot be empty", None))?;

    let remaining = last.points;
    let completed_ratio = (total_points - remaining) / total_points;

    Ok(SprintMetrics {
        velocity: round_half_up(completed_ratio * 100.0) / 100.0,
        completion_rate: round_half_up(completed_ratio * 100.0),
        remaining_work: remaining,
    })
}
