use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintMetrics {
    /// Completed fraction of the total, two decimals (0.0 - 1.0)
    pub velocity: f64,
    /// Completed percentage, whole number (0 - 100)
    pub completion_rate: f64,
    pub remaining_work: f64,
}
