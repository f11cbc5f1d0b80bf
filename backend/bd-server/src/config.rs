use crate::error::Result as ServerErrorResult;

use bd_config::Config;

/// Load configuration and validate it before anything else starts
pub fn load_config() -> ServerErrorResult<Config> {
    let config = Config::load()?;
    config.validate()?;
    Ok(config)
}
