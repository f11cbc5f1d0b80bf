#[allow(clippy::module_inception)]
pub mod client;
pub mod error;

pub use client::Client;
pub use error::{ClientError, Result as CliClientResult, format_error_message};
