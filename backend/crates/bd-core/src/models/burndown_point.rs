use serde::{Deserialize, Serialize};

/// Remaining story points at the end of a sprint day (day 0 is the start)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BurndownPoint {
    pub day: u32,
    pub points: f64,
}

impl BurndownPoint {
    pub fn new(day: u32, points: f64) -> Self {
        Self { day, points }
    }
}

pub type BurndownSeries = Vec<BurndownPoint>;
