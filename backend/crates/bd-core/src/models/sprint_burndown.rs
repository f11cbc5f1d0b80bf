use crate::{
    BurndownChartRow, BurndownSeries, CoreResult, SprintMetrics, SprintRecord, actual_line,
    chart_rows, ideal_line, sprint_metrics,
};

use serde::{Deserialize, Serialize};

/// Chart-ready view of a stored sprint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintBurndown {
    pub ideal_line: BurndownSeries,
    pub actual_progress: BurndownSeries,
    pub chart: Vec<BurndownChartRow>,
    pub metrics: SprintMetrics,
}

impl SprintBurndown {
    pub fn for_record(record: &SprintRecord) -> CoreResult<Self> {
        let ideal = ideal_line(record.total_points, record.sprint_duration)?;
        let actual = actual_line(record.total_points, &record.daily_progress);
        let metrics = sprint_metrics(&actual, record.total_points)?;
        let chart = chart_rows(&ideal, &actual);

        Ok(Self {
            ideal_line: ideal,
            actual_progress: actual,
            chart,
            metrics,
        })
    }
}
