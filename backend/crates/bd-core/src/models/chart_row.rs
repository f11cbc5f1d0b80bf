use serde::{Deserialize, Serialize};

/// One day of a burndown chart: the ideal line and, once recorded, the actual line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BurndownChartRow {
    pub day: u32,
    pub ideal: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<f64>,
}
