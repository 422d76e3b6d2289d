//! Random draw (wheel) configuration.

use serde::{Deserialize, Serialize};

/// Timing and retry settings for the random draw.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawConfig {
    /// How long a wheel spin takes before it reports a result.
    pub spin_duration_ms: u64,
    /// Pause between the first pick and the second draw.
    pub pick_delay_ms: u64,
    /// Draws per pick before the round is given up as stalled.
    pub max_attempts: u32,
    /// Times a stalled round is started again before pairing gives up.
    pub max_round_restarts: u32,
    /// Let the wheel land on the member the session expects.
    pub honor_target_hint: bool,
    /// Minimum full turns per spin.
    pub min_spins: f64,
    /// Maximum full turns per spin.
    pub max_spins: f64,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            spin_duration_ms: 4000,
            pick_delay_ms: 120,
            max_attempts: 16,
            max_round_restarts: 32,
            honor_target_hint: true,
            min_spins: 5.0,
            max_spins: 10.0,
        }
    }
}
