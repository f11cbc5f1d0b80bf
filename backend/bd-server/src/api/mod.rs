pub mod api_response;
pub mod burndown;
pub mod error;
pub mod sprints;
