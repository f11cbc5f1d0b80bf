pub mod burndown_point;
pub mod burndown_test_data;
pub mod chart_row;
pub mod scenario;
pub mod sprint_burndown;
pub mod sprint_metrics;
pub mod sprint_patch;
pub mod sprint_record;
pub mod sprint_submission;
