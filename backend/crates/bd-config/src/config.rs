use crate::{
    BurndownConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIRECTORY, LoggingConfig, ServerConfig, StoreConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub store: StoreConfig,
    pub burndown: BurndownConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Load a `.env` file from the working directory if present
    /// 2. Check for BD_CONFIG_DIR env var, else use ./.burndown/
    /// 3. Auto-create config directory if it doesn't exist
    /// 4. Load config.toml if it exists, else use defaults
    /// 5. Apply BD_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let _ = dotenvy::dotenv();

        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: BD_CONFIG_DIR env var > ./.burndown/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRECTORY))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.logging.validate()?;
        self.burndown.validate()?;
        Ok(())
    }

    /// Get absolute path to the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => {
                let log_dir = Self::config_dir()?.join(&self.logging.dir);
                Ok(Some(log_dir.join(filename)))
            }
            None => Ok(None),
        }
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!("  store: id_strategy={}", self.store.id_strategy.as_str());
        info!(
            "  burndown: sample={}pts/{}d/{}, max={}d",
            self.burndown.default_total_points,
            self.burndown.default_duration_days,
            self.burndown.default_scenario,
            self.burndown.max_duration_days
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("BD_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("BD_SERVER_PORT", &mut self.server.port);

        // Logging
        Self::apply_env_parse("BD_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("BD_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("BD_LOG_FILE", &mut self.logging.file);
        Self::apply_env_string("BD_LOG_DIR", &mut self.logging.dir);

        // Store
        Self::apply_env_parse("BD_STORE_ID_STRATEGY", &mut self.store.id_strategy);

        // Burndown
        Self::apply_env_parse(
            "BD_BURNDOWN_DEFAULT_TOTAL_POINTS",
            &mut self.burndown.default_total_points,
        );
        Self::apply_env_parse(
            "BD_BURNDOWN_DEFAULT_DURATION_DAYS",
            &mut self.burndown.default_duration_days,
        );
        Self::apply_env_string(
            "BD_BURNDOWN_DEFAULT_SCENARIO",
            &mut self.burndown.default_scenario,
        );
        Self::apply_env_parse(
            "BD_BURNDOWN_MAX_DURATION_DAYS",
            &mut self.burndown.max_duration_days,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
