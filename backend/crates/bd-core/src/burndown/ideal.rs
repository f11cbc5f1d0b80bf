use super::{ensure_sprint_shape, round_to_tenth};
use crate::{BurndownPoint, BurndownSeries, CoreResult};

/// Straight line from `total_points` on day 0 to zero on the last day.
///
/// Returns `duration_days + 1` points rounded to one decimal.
pub fn ideal_line(total_points: f64, duration_days: u32) -> CoreResult<BurndownSeries> {
    ensure_sprint_shape(total_points, duration_days)?;

    let points_per_day = total_points / f64::from(duration_days);

    Ok((0..=duration_days)
        .map(|day| {
            let remaining = total_points - points_per_day * f64::from(day);
            BurndownPoint::new(day, round_to_tenth(remaining))
        })
        .collect())
}
