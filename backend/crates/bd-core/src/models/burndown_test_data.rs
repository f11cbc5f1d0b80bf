use crate::{
    BurndownSeries, DEFAULT_SAMPLE_DURATION_DAYS, DEFAULT_SAMPLE_TOTAL_POINTS, Scenario,
    SprintMetrics,
};

use serde::{Deserialize, Serialize};

/// Parameters for a synthetic burndown data set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SampleRequest {
    pub total_points: f64,
    pub duration_days: u32,
    pub scenario: Scenario,
}

impl Default for SampleRequest {
    fn default() -> Self {
        Self {
            total_points: DEFAULT_SAMPLE_TOTAL_POINTS,
            duration_days: DEFAULT_SAMPLE_DURATION_DAYS,
            scenario: Scenario::Ideal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintInfo {
    pub total_points: f64,
    pub duration_days: u32,
    pub scenario: Scenario,
}

impl From<&SampleRequest> for SprintInfo {
    fn from(request: &SampleRequest) -> Self {
        Self {
            total_points: request.total_points,
            duration_days: request.duration_days,
            scenario: request.scenario,
        }
    }
}

/// Ideal line, synthetic actual line and the metrics of the actual line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BurndownTestData {
    pub ideal_line: BurndownSeries,
    pub actual_progress: BurndownSeries,
    pub metrics: SprintMetrics,
    pub sprint_info: SprintInfo,
}
