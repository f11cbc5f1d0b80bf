#![allow(dead_code)]

//! Test infrastructure for bd-store tests

use bd_core::SprintSubmission;
use bd_store::{Clock, IdGenerator, SequentialIdGenerator, SprintStore};

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};

/// Clock that moves forward one second every time it is read
pub struct SteppingClock {
    current: Mutex<DateTime<Utc>>,
}

impl SteppingClock {
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            current: Mutex::new(start),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut current = self.current.lock().unwrap();
        let now = *current;
        *current = now + Duration::seconds(1);
        now
    }
}

/// Generator that always hands out the same id
pub struct FixedIdGenerator(pub &'static str);

impl IdGenerator for FixedIdGenerator {
    fn next_id(&self) -> String {
        self.0.to_string()
    }
}

pub fn test_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap()
}

/// Store with sequential ids and a stepping clock
pub fn create_test_store() -> SprintStore {
    SprintStore::with_parts(
        Arc::new(SequentialIdGenerator::new()),
        Arc::new(SteppingClock::starting_at(test_start())),
    )
}

pub fn create_test_submission() -> SprintSubmission {
    SprintSubmission {
        total_points: 100.0,
        sprint_duration: 10,
        daily_progress: Some(vec![20.0, 15.0, 10.0, 5.0]),
    }
}
