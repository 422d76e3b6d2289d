//! pairwheel configuration system.
//!
//! TOML-based configuration for forbidden groups, the locked pair, draw
//! timing and logging. All sections use defaults so partial configs work,
//! and every file is validated before use.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pairwheel_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    ConstraintsConfig, DrawConfig, LoggingConfig, PairwheelConfig, PoolConfig, SessionConfig,
    CONFIG_SCHEMA_VERSION,
};

use std::path::Path;

use pairwheel_common::ConfigError;

/// Load config from an explicit path, or from the platform default
/// location when `path` is `None`.
///
/// An explicit path that does not exist is an error; the default location
/// is created with a commented template on first use.
pub fn load_config(path: Option<&Path>) -> Result<PairwheelConfig, ConfigError> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            toml_loader::load_from_path(path)
        }
        None => toml_loader::load_default(),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &PairwheelConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
