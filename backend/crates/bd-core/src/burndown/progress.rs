use super::{ensure_sprint_shape, round_to_tenth};
use crate::{BurndownPoint, BurndownSeries, CoreResult, Scenario};

use rand::Rng;

/// Generate a plausible actual burndown for `scenario`.
///
/// Each day burns `(total / duration) * completion` plus uniform noise of
/// up to `variability` of that target in either direction. Neither the daily
/// burn nor the remaining work goes below zero. The running total is kept
/// unrounded; only the emitted points are rounded to one decimal.
pub fn synthetic_progress<R: Rng>(
    total_points: f64,
    duration_days: u32,
    scenario: Scenario,
    rng: &mut R,
) -> CoreResult<BurndownSeries> {
    ensure_sprint_shape(total_points, duration_days)?;

    let profile = scenario.profile();
    let daily_target = (total_points / f64::from(duration_days)) * profile.completion;

    let mut series = Vec::with_capacity(duration_days as usize + 1);
    series.push(BurndownPoint::new(0, total_points));

    let mut remaining = total_points;
    for day in 1..=duration_days {
        let variation = (rng.random::<f64>() * 2.0 - 1.0) * daily_target * profile.variability;
        let burned = (daily_target + variation).max(0.0);

        remaining = (remaining - burned).max(0.0);
        series.push(BurndownPoint::new(day, round_to_tenth(remaining)));
    }

    Ok(series)
}

/// Remaining work after each recorded day of progress.
///
/// `daily_progress[i]` is the number of points completed on day `i + 1`.
pub fn actual_line(total_points: f64, daily_progress: &[f64]) -> BurndownSeries {
    let mut series = Vec::with_capacity(daily_progress.len() + 1);
    series.push(BurndownPoint::new(0, total_points));

    let mut remaining = total_points;
    for (day, completed) in (1u32..).zip(daily_progress) {
        remaining = (remaining - completed.max(0.0)).max(0.0);
        series.push(BurndownPoint::new(day, round_to_tenth(remaining)));
    }

    series
}
