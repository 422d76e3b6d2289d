use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a pairing session is within its current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundState {
    /// No round in progress. Initial and terminal state of every round.
    #[default]
    Idle,
    /// Waiting for the draw that selects the first member of the pair.
    AwaitingFirst,
    /// First member fixed; waiting for the draw that selects the second.
    AwaitingSecond,
    /// Exactly two people remain and a single cosmetic draw is in flight.
    FinalPair,
}

impl RoundState {
    pub fn is_idle(self) -> bool {
        self == RoundState::Idle
    }
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoundState::Idle => "idle",
            RoundState::AwaitingFirst => "awaiting first",
            RoundState::AwaitingSecond => "awaiting second",
            RoundState::FinalPair => "final pair",
        };
        f.write_str(name)
    }
}
