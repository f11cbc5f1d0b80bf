use serde::{Deserialize, Serialize};

/// Partial update merged over an existing sprint record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_points: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprint_duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_progress: Option<Vec<f64>>,
}
