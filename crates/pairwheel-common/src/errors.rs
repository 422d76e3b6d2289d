use std::path::PathBuf;

use crate::types::RoundState;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Conditions reported by the pairing engine. None of them are fatal:
/// mutations that fail are simply not applied, and round failures leave
/// the session idle and ready for another attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PairingError {
    #[error("name is empty")]
    EmptyName,

    #[error("already in the pool: {0}")]
    DuplicatePerson(String),

    #[error("not in the pool: {0}")]
    UnknownPerson(String),

    #[error("'{0}' and '{1}' may not be paired")]
    ForbiddenPair(String, String),

    #[error("no legal pairing possible ({remaining} remaining)")]
    NoLegalPairs { remaining: usize },

    #[error("round already in progress ({0})")]
    InvalidRoundStart(RoundState),

    #[error("draw stalled after {attempts} attempts")]
    DrawStalled { attempts: u32 },

    #[error("round aborted")]
    RoundAborted,

    #[error("draw failed: {0}")]
    Draw(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PairwheelError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Pairing(#[from] PairingError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
