mod burndown_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod store_config;

#[cfg(test)]
mod tests;

pub use burndown_config::BurndownConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use store_config::{IdStrategy, StoreConfig};

const CONFIG_DIR_ENV: &str = "BD_CONFIG_DIR";
const DEFAULT_CONFIG_DIRECTORY: &str = ".burndown";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const MIN_PORT: u16 = 1024;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const MAX_SAMPLE_DURATION_DAYS: u32 = 365;
