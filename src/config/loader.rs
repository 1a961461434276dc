//! Configuration loading from file system
//!
//! Handles loading and parsing the config.json file.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use super::defaults::DEFAULT_CONFIG_PATH;
use super::types::Config;
use crate::error::{Result, SceneSearchError};

/// Load configuration from ~/.scene-search/config.json
///
/// Returns Config::default() if the file is missing or cannot be parsed.
#[instrument(name = "load_config")]
pub fn load_config() -> Config {
    let config_path = PathBuf::from(shellexpand::tilde(DEFAULT_CONFIG_PATH).as_ref());

    if !config_path.exists() {
        info!(path = %config_path.display(), "Config file not found, using defaults");
        return Config::default();
    }

    match load_config_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            warn!(
                error = %e,
                path = %config_path.display(),
                "Failed to load config, using defaults"
            );
            Config::default()
        }
    }
}

/// Load configuration from an explicit path.
///
/// Unlike [`load_config`], a missing or malformed file is an error.
pub fn load_config_from(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        SceneSearchError::Config(format!("cannot read {}: {}", path.display(), e))
    })?;

    let config = serde_json::from_str::<Config>(content.trim()).map_err(|e| {
        let hint = if e.to_string().contains("unknown variant") {
            " (check backspaceOnEmpty and share.excludedTargets values)"
        } else {
            ""
        };
        SceneSearchError::Config(format!("invalid {}: {}{}", path.display(), e, hint))
    })?;

    info!(path = %path.display(), "Successfully loaded config");
    Ok(config)
}
