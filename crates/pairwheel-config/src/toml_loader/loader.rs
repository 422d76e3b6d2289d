//! Core TOML config loading: read from path or platform default.

use crate::schema::PairwheelConfig;
use crate::validation;
use pairwheel_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields, then
/// validates it. Constraints decide who may be paired, so a config that
/// fails validation is returned as an error rather than used.
pub fn load_from_path(path: &Path) -> Result<PairwheelConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: PairwheelConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("rejecting config at {}: {e}", path.display());
        return Err(e);
    }

    info!(
        groups = config.constraints.forbidden_groups.len(),
        locked = config.constraints.locked_pair.is_some(),
        "loaded config from {}",
        path.display()
    );
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/pairwheel/config.toml`
/// On Linux: `~/.config/pairwheel/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<PairwheelConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config found at {}, creating default", path.display());
        create_default_config(&path)?;
        return Ok(PairwheelConfig::default());
    }

    load_from_path(&path)
}
