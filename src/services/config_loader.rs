//! Configuration file loading.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, ViajaConfig};

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "viaja.toml";

/// Load configuration from an explicit path, or from `viaja.toml` in `cwd`.
///
/// An explicit path must exist. The implicit file is optional and falls back
/// to defaults when absent.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<ViajaConfig, AppError> {
    let (path, required) = match explicit {
        Some(path) => (path.to_path_buf(), true),
        None => (cwd.join(DEFAULT_CONFIG_FILE), false),
    };

    if !path.exists() {
        if required {
            return Err(AppError::config_error(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(ViajaConfig::default());
    }

    parse_config_file(&path)
}

fn parse_config_file(path: &Path) -> Result<ViajaConfig, AppError> {
    let content = fs::read_to_string(path)?;
    let config: ViajaConfig = toml::from_str(&content)?;
    config.validate()?;
    tracing::debug!(path = %path.display(), model = %config.generation.model, "loaded config");
    Ok(config)
}
