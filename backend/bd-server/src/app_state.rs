use bd_config::{BurndownConfig, Config, IdStrategy};
use bd_core::{SampleRequest, Scenario};
use bd_store::{SequentialIdGenerator, SprintStore, SystemClock};

use std::str::FromStr;
use std::sync::Arc;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub store: SprintStore,
    pub sample: SampleDefaults,
}

/// Values used by the sample endpoint when the query leaves them out
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleDefaults {
    pub request: SampleRequest,
    pub max_duration_days: u32,
}

impl AppState {
    pub fn new(store: SprintStore, sample: SampleDefaults) -> Self {
        Self { store, sample }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            store_for(config.store.id_strategy),
            SampleDefaults::from(&config.burndown),
        )
    }
}

/// Build an empty store using the configured id strategy
pub fn store_for(strategy: IdStrategy) -> SprintStore {
    match strategy {
        IdStrategy::Uuid => SprintStore::new(),
        IdStrategy::Sequential => SprintStore::with_parts(
            Arc::new(SequentialIdGenerator::new()),
            Arc::new(SystemClock),
        ),
    }
}

impl Default for SampleDefaults {
    fn default() -> Self {
        Self::from(&BurndownConfig::default())
    }
}

impl From<&BurndownConfig> for SampleDefaults {
    fn from(config: &BurndownConfig) -> Self {
        Self {
            request: SampleRequest {
                total_points: config.default_total_points,
                duration_days: config.default_duration_days,
                scenario: Scenario::from_str(&config.default_scenario).unwrap_or_default(),
            },
            max_duration_days: config.max_duration_days,
        }
    }
}
