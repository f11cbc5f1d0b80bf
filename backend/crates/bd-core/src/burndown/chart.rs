use crate::{BurndownChartRow, BurndownPoint};

/// Join the ideal and actual series by day.
///
/// One row per ideal day; `actual` is empty for days with no recorded progress.
pub fn chart_rows(ideal: &[BurndownPoint], actual: &[BurndownPoint]) -> Vec<BurndownChartRow> {
    ideal
        .iter()
        .map(|point| BurndownChartRow {
            day: point.day,
            ideal: point.points,
            actual: actual
                .iter()
                .find(|recorded| recorded.day == point.day)
                .map(|recorded| recorded.points),
        })
        .collect()
}
