//! Configuration management module

use anyhow::{Context, Result};

use crate::model::Config;

/// Load the user configuration, or defaults when no file exists
pub fn load_config() -> Result<Config> {
    let config_path = Config::config_path();
    let config = Config::load()
        .with_context(|| format!("Failed to load config {}", config_path.display()))?;

    log::debug!(
        "config: program={} shell={}",
        config.make.program,
        config.make.shell
    );

    Ok(config)
}
