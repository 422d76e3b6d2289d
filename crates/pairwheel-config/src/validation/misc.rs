//! Validation for the initial pool and logging.

use crate::schema::PairwheelConfig;

use super::helpers::normalize_names;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

pub(crate) fn validate_pool(errors: &mut Vec<String>, config: &PairwheelConfig) {
    let (_, duplicates) = normalize_names(errors, "pool.names", &config.pool.names);
    for dup in duplicates {
        errors.push(format!("pool.names lists '{}' more than once", dup.key()));
    }
}

pub(crate) fn validate_logging(errors: &mut Vec<String>, config: &PairwheelConfig) {
    let level = config.logging.level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(format!(
            "logging.level = '{}' must be one of {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        ));
    }
}
