//! Pool and configuration changes: add, remove, lock, reset.
//!
//! Any change that alters the queue while a round is running aborts that
//! round first. Results the draw delivers afterwards for the old round are
//! reported as stale and ignored.

use pairwheel_common::{PairingError, Person, RoundState, SessionEvent};
use tracing::{info, warn};

use crate::pair::LockedPair;

use super::PairingSession;

impl PairingSession {
    /// Add someone to the pool. Duplicates and blank names are ignored and
    /// reported as errors.
    pub fn add_person(&mut self, name: &str) -> Result<Person, PairingError> {
        let person = Person::parse(name).ok_or(PairingError::EmptyName)?;
        if let Err(e) = self.pool.add(person.clone()) {
            warn!(session = %self.id, person = %person, "ignoring add: {e}");
            return Err(e);
        }
        self.abort_round("pool changed");
        self.regenerate_queue();
        info!(session = %self.id, person = %person, pool = self.pool.len(), "person added");
        self.publish(SessionEvent::PersonAdded(person.label().to_string()));
        Ok(person)
    }

    /// Remove someone from the pool. Unknown names are ignored and reported
    /// as errors.
    pub fn remove_person(&mut self, name: &str) -> Result<Person, PairingError> {
        let person = Person::parse(name).ok_or(PairingError::EmptyName)?;
        let removed = match self.pool.remove(&person) {
            Ok(removed) => removed,
            Err(e) => {
                warn!(session = %self.id, person = %person, "ignoring remove: {e}");
                return Err(e);
            }
        };
        self.abort_round("pool changed");
        self.regenerate_queue();
        info!(session = %self.id, person = %removed, pool = self.pool.len(), "person removed");
        self.publish(SessionEvent::PersonRemoved(removed.label().to_string()));
        Ok(removed)
    }

    /// Replace the locked pair (or clear it with `None`). A pair the
    /// constraints forbid is refused.
    pub fn set_locked_pair(&mut self, locked: Option<LockedPair>) -> Result<(), PairingError> {
        if let Some(pair) = &locked {
            let (a, b) = pair.members();
            if self.constraints.is_forbidden(a, b) {
                warn!(session = %self.id, pair = %pair, "refusing forbidden locked pair");
                return Err(PairingError::ForbiddenPair(
                    a.label().to_string(),
                    b.label().to_string(),
                ));
            }
        }
        if self.locked == locked {
            return Ok(());
        }
        self.abort_round("locked pair changed");
        self.locked = locked;
        self.regenerate_queue();
        Ok(())
    }

    /// Abandon any round in flight and reshuffle the queue. The pool is kept.
    pub fn reset(&mut self) {
        self.abort_round("reset");
        self.regenerate_queue();
    }

    /// Drop the active round, if any. Returns whether one was running.
    pub(super) fn abort_round(&mut self, reason: &str) -> bool {
        let Some(round) = self.round.take() else {
            return false;
        };
        warn!(
            session = %self.id,
            round = %round.id,
            state = %round.state(),
            "round aborted: {reason}"
        );
        self.publish(SessionEvent::RoundAborted {
            reason: reason.to_string(),
        });
        self.publish(SessionEvent::RoundStateChanged(RoundState::Idle));
        true
    }
}
