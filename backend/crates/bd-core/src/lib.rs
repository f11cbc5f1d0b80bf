pub mod burndown;
pub mod error;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use burndown::{
    actual_line, burndown_test_data, chart_rows, ideal_line, sprint_metrics, synthetic_progress,
};
pub use error::{CoreError, Result as CoreResult};
pub use models::burndown_point::{BurndownPoint, BurndownSeries};
pub use models::burndown_test_data::{BurndownTestData, SampleRequest, SprintInfo};
pub use models::chart_row::BurndownChartRow;
pub use models::scenario::{Scenario, ScenarioProfile};
pub use models::sprint_burndown::SprintBurndown;
pub use models::sprint_metrics::SprintMetrics;
pub use models::sprint_patch::SprintPatch;
pub use models::sprint_record::SprintRecord;
pub use models::sprint_submission::SprintSubmission;
pub use validation::{ensure_progress_fits, validate_submission};

pub const DEFAULT_SAMPLE_TOTAL_POINTS: f64 = 100.0;
pub const DEFAULT_SAMPLE_DURATION_DAYS: u32 = 14;
