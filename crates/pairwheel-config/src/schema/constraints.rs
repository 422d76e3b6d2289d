//! Pairing constraint configuration.

use serde::{Deserialize, Serialize};

/// Static pairing rules, loaded once when a session starts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstraintsConfig {
    /// Groups of names; no two members of the same group may be paired.
    pub forbidden_groups: Vec<Vec<String>>,
    /// A pair announced before anything else whenever both are present.
    pub locked_pair: Option<[String; 2]>,
}

/// Participants present when a session starts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    pub names: Vec<String>,
}
