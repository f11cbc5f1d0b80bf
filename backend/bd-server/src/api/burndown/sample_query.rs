use serde::Deserialize;

/// Query string of GET /api/burndown/sample. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleQuery {
    pub total_points: Option<f64>,
    pub duration_days: Option<u32>,
    pub scenario: Option<String>,
    /// Fixes the random source so the response is reproducible
    pub seed: Option<u64>,
}
