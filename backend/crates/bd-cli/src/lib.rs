//! bd-cli library
//!
//! Exports the HTTP client and command dispatch for use in tests.

pub mod cli;
pub mod client;
pub mod commands;
pub mod progress;
pub mod sprint_commands;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use client::{CliClientResult, Client, ClientError, format_error_message};
pub use commands::{Commands, execute};
pub use progress::{SprintInput, parse_daily_progress};
pub use sprint_commands::SprintCommands;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";
