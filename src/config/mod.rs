mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the YAML config (if any) and layers the environment on top of it.
pub async fn load() -> Result<Config> {
    let mut config = match env::var("CONFIG_PATH") {
        Ok(path) => load_from_path(&path).await?,
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            load_from_path(DEFAULT_CONFIG_PATH).await?
        }
        Err(_) => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    apply_env(&mut config, |key| env::var(key).ok());

    Ok(config)
}

pub async fn load_from_path(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    if config.server.max_body_bytes == 0 {
        return Err(Error::config("server.max_body_bytes must be greater than zero"));
    }

    Ok(config)
}

/// Applies environment overrides. An empty credential counts as absent.
pub fn apply_env<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    config.upstream.api_key = lookup(API_KEY_ENV).filter(|key| !key.is_empty());

    if let Some(port) = lookup("PORT").and_then(|p| p.parse::<u16>().ok()) {
        config.server.port = port;
    }
}
