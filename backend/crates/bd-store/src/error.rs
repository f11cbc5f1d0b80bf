use bd_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Sprint not found: {id} {location}")]
    NotFound { id: String, location: ErrorLocation },

    #[error("Generated sprint id already in use: {id} {location}")]
    DuplicateId { id: String, location: ErrorLocation },

    #[error("Update rejected: {source} {location}")]
    Invariant {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn not_found(id: &str) -> Self {
        Self::NotFound {
            id: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId {
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for StoreError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Invariant {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
