//! Turning command line input into a sprint submission

use crate::{CliClientResult, ClientError};

use bd_core::validation::{FIELD_DAILY_PROGRESS, MSG_PROGRESS_NEGATIVE};
use bd_core::{SprintSubmission, validate_submission};

use serde_json::{Value, json};

/// Parse comma separated daily progress: "5, 3,, 4" -> [5.0, 3.0, 4.0]
///
/// Items are trimmed and empty items dropped.
pub fn parse_daily_progress(input: &str) -> CliClientResult<Vec<f64>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<f64>().map_err(|_| {
                ClientError::validation(
                    format!("{} (got '{}')", MSG_PROGRESS_NEGATIVE, item),
                    Some(FIELD_DAILY_PROGRESS),
                )
            })
        })
        .collect()
}

/// Validated sprint input ready to send
#[derive(Debug, Clone, PartialEq)]
pub struct SprintInput {
    pub submission: SprintSubmission,
}

impl SprintInput {
    /// Parse and check the input with the same rules the server applies,
    /// so obviously bad input never leaves the machine.
    pub fn parse(
        total_points: f64,
        sprint_duration: f64,
        daily_progress: Option<&str>,
    ) -> CliClientResult<Self> {
        let daily_progress = daily_progress.map(parse_daily_progress).transpose()?;

        let body = json!({
            "totalPoints": total_points,
            "sprintDuration": sprint_duration,
            "dailyProgress": daily_progress,
        });

        let submission = validate_submission(&body)?;
        Ok(Self { submission })
    }

    /// JSON body as sent to the server
    pub fn to_body(&self) -> CliClientResult<Value> {
        Ok(serde_json::to_value(&self.submission)?)
    }
}
