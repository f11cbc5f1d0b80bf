use crate::SprintPatch;

use serde::{Deserialize, Serialize};

/// A sprint submission that passed the validation rule set.
///
/// `daily_progress` stays `None` when the client did not send it, which
/// lets an update keep the progress already recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintSubmission {
    pub total_points: f64,
    pub sprint_duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_progress: Option<Vec<f64>>,
}

impl From<SprintSubmission> for SprintPatch {
    fn from(submission: SprintSubmission) -> Self {
        Self {
            total_points: Some(submission.total_points),
            sprint_duration: Some(submission.sprint_duration),
            daily_progress: submission.daily_progress,
        }
    }
}
