//! The random draw collaborator.
//!
//! A draw is given an ordered candidate list and eventually yields exactly
//! one person. The session decides which pair is announced; a draw only
//! supplies the pick that has to agree with it, so implementations are free
//! to animate, delay or be scripted.

mod scripted;
mod wheel;

use async_trait::async_trait;
use pairwheel_common::Person;

pub use scripted::ScriptedDraw;
pub use wheel::{landed_index, segment_angle, WheelDraw, WheelSettings};

#[async_trait]
pub trait RandomDraw: Send {
    /// Pick one of `candidates`. `target_hint` names the person the session
    /// expects; implementations may use it to settle on that person.
    ///
    /// Real draws resolve to a member of `candidates`. Test doubles such as
    /// [`ScriptedDraw`] may return someone outside it; the session treats
    /// that like any other unexpected pick and draws again.
    async fn draw(
        &mut self,
        candidates: &[Person],
        target_hint: Option<&Person>,
    ) -> Result<Person, DrawError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DrawError {
    #[error("no candidates to draw from")]
    EmptyCandidates,
    #[error("{0}")]
    Failed(String),
}
