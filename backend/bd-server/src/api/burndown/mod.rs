#[allow(clippy::module_inception)]
pub mod burndown;
pub mod sample_query;
