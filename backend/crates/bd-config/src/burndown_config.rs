use crate::{ConfigError, ConfigErrorResult, MAX_SAMPLE_DURATION_DAYS};

use bd_core::{DEFAULT_SAMPLE_DURATION_DAYS, DEFAULT_SAMPLE_TOTAL_POINTS, Scenario};

use serde::Deserialize;

/// Defaults for the sample burndown endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BurndownConfig {
    pub default_total_points: f64,
    pub default_duration_days: u32,
    /// ideal, delayed, ahead or stuck (case-insensitive)
    pub default_scenario: String,
    /// Upper bound on the requested sample length
    pub max_duration_days: u32,
}

impl Default for BurndownConfig {
    fn default() -> Self {
        Self {
            default_total_points: DEFAULT_SAMPLE_TOTAL_POINTS,
            default_duration_days: DEFAULT_SAMPLE_DURATION_DAYS,
            default_scenario: String::from(Scenario::default().as_str()),
            max_duration_days: MAX_SAMPLE_DURATION_DAYS,
        }
    }
}

impl BurndownConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.default_total_points.is_finite() || self.default_total_points <= 0.0 {
            return Err(ConfigError::burndown(format!(
                "burndown.default_total_points must be positive, got {}",
                self.default_total_points
            )));
        }

        if self.max_duration_days == 0 || self.max_duration_days > MAX_SAMPLE_DURATION_DAYS {
            return Err(ConfigError::burndown(format!(
                "burndown.max_duration_days must be 1-{}, got {}",
                MAX_SAMPLE_DURATION_DAYS, self.max_duration_days
            )));
        }

        if self.default_duration_days == 0 || self.default_duration_days > self.max_duration_days
        {
            return Err(ConfigError::burndown(format!(
                "burndown.default_duration_days must be 1-{}, got {}",
                self.max_duration_days, self.default_duration_days
            )));
        }

        if !matches!(
            self.default_scenario.trim().to_lowercase().as_str(),
            "ideal" | "delayed" | "ahead" | "stuck"
        ) {
            return Err(ConfigError::burndown(format!(
                "burndown.default_scenario must be ideal, delayed, ahead or stuck, got '{}'",
                self.default_scenario
            )));
        }

        Ok(())
    }
}
