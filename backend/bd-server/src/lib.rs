pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod health;
pub mod logger;
pub mod request_logging;
pub mod routes;
pub mod shutdown_coordinator;
pub mod shutdown_guard;

#[cfg(test)]
mod tests;

pub use api::{
    api_response::{ApiResponse, MessageResponse},
    burndown::{burndown::sample_burndown, sample_query::SampleQuery},
    error::ApiError,
    error::Result as ApiResult,
    sprints::sprints::{
        create_sprint, delete_sprint, get_sprint, get_sprint_burndown, list_sprints,
        update_sprint,
    },
};
pub use app_state::{AppState, SampleDefaults};
pub use config::load_config;
pub use error::{Result as ServerResult, ServerError};
pub use routes::build_router;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
