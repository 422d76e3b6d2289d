//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod constraints;
mod draw;
mod helpers;
mod misc;


use crate::schema::PairwheelConfig;
use pairwheel_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PairwheelConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    constraints::validate_forbidden_groups(&mut errors, config);
    constraints::validate_locked_pair(&mut errors, config);
    draw::validate_draw(&mut errors, config);
    misc::validate_pool(&mut errors, config);
    misc::validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
