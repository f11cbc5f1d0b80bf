//! Burndown math
//!
//! Everything here is a pure function of its arguments. The only source of
//! nondeterminism, the synthetic progress generator, takes its random source
//! from the caller so tests can pin it with a seeded generator.

mod chart;
mod ideal;
mod metrics;
mod progress;
mod test_data;

pub use chart::chart_rows;
pub use ideal::ideal_line;
pub use metrics::sprint_metrics;
pub use progress::{actual_line, synthetic_progress};
pub use test_data::burndown_test_data;

use crate::validation::{
    FIELD_SPRINT_DURATION, FIELD_TOTAL_POINTS, MSG_SPRINT_DURATION, MSG_TOTAL_POINTS,
};
use crate::{CoreError, CoreResult};

/// Round half up, matching `floor(x + 0.5)`
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to one decimal place
///
/// Values too large to scale have no fractional digits left and are
/// returned as they are.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    let scaled = value * 10.0;
    if !scaled.is_finite() {
        return value;
    }
    round_half_up(scaled) / 10.0
}

#[track_caller]
pub(crate) fn ensure_sprint_shape(total_points: f64, duration_days: u32) -> CoreResult<()> {
    if !total_points.is_finite() || total_points <= 0.0 {
        return Err(CoreError::validation(
            MSG_TOTAL_POINTS,
            Some(FIELD_TOTAL_POINTS),
        ));
    }
    if duration_days == 0 {
        return Err(CoreError::validation(
            MSG_SPRINT_DURATION,
            Some(FIELD_SPRINT_DURATION),
        ));
    }
    Ok(())
}
