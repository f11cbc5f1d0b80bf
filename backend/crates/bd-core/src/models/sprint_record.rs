use crate::{CoreResult, SprintPatch, SprintSubmission, ensure_progress_fits};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintRecord {
    pub id: String,

    pub total_points: f64,
    pub sprint_duration: u32,
    pub daily_progress: Vec<f64>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SprintRecord {
    pub fn new(id: String, submission: SprintSubmission, now: DateTime<Utc>) -> Self {
        Self {
            id,
            total_points: submission.total_points,
            sprint_duration: submission.sprint_duration,
            daily_progress: submission.daily_progress.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge `patch` over this record and return the result.
    ///
    /// `id` and `created_at` never change. Fails without touching `self`
    /// when the merged progress would outgrow the sprint duration.
    pub fn merged(&self, patch: &SprintPatch, now: DateTime<Utc>) -> CoreResult<Self> {
        let mut merged = self.clone();

        if let Some(total_points) = patch.total_points {
            merged.total_points = total_points;
        }
        if let Some(sprint_duration) = patch.sprint_duration {
            merged.sprint_duration = sprint_duration;
        }
        if let Some(ref daily_progress) = patch.daily_progress {
            merged.daily_progress = daily_progress.clone();
        }

        ensure_progress_fits(merged.daily_progress.len(), merged.sprint_duration)?;

        merged.updated_at = now;
        Ok(merged)
    }
}
