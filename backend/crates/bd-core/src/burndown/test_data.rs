use crate::{
    BurndownTestData, CoreResult, SampleRequest, SprintInfo, ideal_line, sprint_metrics,
    synthetic_progress,
};

use rand::Rng;

/// Build a complete synthetic data set for a burndown chart
pub fn burndown_test_data<R: Rng>(
    request: &SampleRequest,
    rng: &mut R,
) -> CoreResult<BurndownTestData> {
    let ideal = ideal_line(request.total_points, request.duration_days)?;
    let actual = synthetic_progress(
        request.total_points,
        request.duration_days,
        request.scenario,
        rng,
    )?;
    let metrics = sprint_metrics(&actual, request.total_points)?;

    Ok(BurndownTestData {
        ideal_line: ideal,
        actual_progress: actual,
        metrics,
        sprint_info: SprintInfo::from(request),
    })
}
