//! The round state machine: start a round, then feed it draw results.

use std::time::Duration;

use pairwheel_common::{Person, RoundState, SessionEvent};
use tracing::{debug, info, warn};

use crate::pair::CandidatePair;

use super::{ActiveRound, DrawOutcome, Phase, PairingSession, RoundId, RoundStart};

impl PairingSession {
    /// Begin a round.
    ///
    /// With exactly two legal partners left the round goes straight to the
    /// final pair. Otherwise the head of the queue becomes the expected pair
    /// and the first draw is requested. Calling this while a round is
    /// running changes nothing.
    pub fn start_round(&mut self) -> RoundStart {
        if let Some(round) = &self.round {
            let state = round.state();
            warn!(session = %self.id, round = %round.id, %state, "start ignored, round in progress");
            return RoundStart::AlreadyActive(state);
        }

        let Some(expected) = self.queue.peek().cloned() else {
            let remaining = self.pool.len();
            info!(session = %self.id, remaining, "no legal pairs");
            self.publish(SessionEvent::NoLegalPairs { remaining });
            return RoundStart::NoLegalPairs { remaining };
        };

        let id = RoundId(self.next_round);
        self.next_round += 1;
        let phase = if self.pool.len() == 2 {
            Phase::Final
        } else {
            Phase::First
        };
        let round = ActiveRound {
            id,
            phase,
            expected,
            wheel: self.pool.members().to_vec(),
            attempts: 1,
        };
        let state = round.state();
        let request = round.request(Duration::ZERO);
        info!(
            session = %self.id,
            round = %id,
            %state,
            pool = self.pool.len(),
            "round started"
        );
        self.round = Some(round);
        self.publish(SessionEvent::RoundStateChanged(state));
        RoundStart::Draw(request)
    }

    /// Report what a draw landed on.
    ///
    /// Only a result matching the expected pick advances the round; anything
    /// else is rejected and drawn again until `max_attempts` is reached.
    pub fn on_draw_result(&mut self, round_id: RoundId, drawn: &Person) -> DrawOutcome {
        let Some(round) = self.round.as_mut() else {
            debug!(session = %self.id, round = %round_id, "draw result with no round running");
            return DrawOutcome::Stale;
        };
        if round.id != round_id {
            debug!(
                session = %self.id,
                round = %round_id,
                current = %round.id,
                "draw result for an old round"
            );
            return DrawOutcome::Stale;
        }

        let accepted = match &round.phase {
            Phase::Final => round.wheel.contains(drawn),
            Phase::First => *drawn == round.expected.first,
            Phase::Second { .. } => *drawn == round.expected.second,
        };
        if !accepted {
            return self.reject(drawn);
        }

        match round.phase.clone() {
            Phase::Final => {
                let Some(other) = round.wheel.iter().find(|p| *p != drawn).cloned() else {
                    return self.reject(drawn);
                };
                self.commit(CandidatePair::new(drawn.clone(), other))
            }
            Phase::First => {
                round.wheel.retain(|p| p != drawn);
                round.phase = Phase::Second {
                    first: drawn.clone(),
                };
                round.attempts = 1;
                let request = round.request(self.settings.pick_delay);
                debug!(session = %self.id, round = %round_id, first = %drawn, "first pick accepted");
                self.publish(SessionEvent::RoundStateChanged(RoundState::AwaitingSecond));
                DrawOutcome::Next(request)
            }
            Phase::Second { first } => self.commit(CandidatePair::new(first, drawn.clone())),
        }
    }

    fn reject(&mut self, drawn: &Person) -> DrawOutcome {
        let max_attempts = self.settings.max_attempts;
        let Some(round) = self.round.as_mut() else {
            return DrawOutcome::Stale;
        };
        warn!(
            session = %self.id,
            round = %round.id,
            drawn = %drawn,
            expected = ?round.target().map(Person::key),
            attempt = round.attempts,
            "draw result rejected"
        );
        if round.attempts >= max_attempts {
            let attempts = round.attempts;
            self.round = None;
            warn!(session = %self.id, attempts, "draw stalled, round abandoned");
            self.publish(SessionEvent::DrawStalled { attempts });
            self.publish(SessionEvent::RoundStateChanged(RoundState::Idle));
            return DrawOutcome::Stalled { attempts };
        }
        round.attempts += 1;
        DrawOutcome::Redraw(round.request(Duration::ZERO))
    }

    fn commit(&mut self, pair: CandidatePair) -> DrawOutcome {
        self.round = None;
        if let Some(head) = self.queue.pop() {
            if head != pair {
                warn!(session = %self.id, head = %head, pair = %pair, "committed pair differs from queue head");
            }
        }
        self.pool.remove_pair(&pair);
        self.regenerate_queue();

        info!(session = %self.id, first = %pair.first, second = %pair.second, "pair committed");
        self.publish(SessionEvent::PairCommitted {
            first: pair.first.label().to_string(),
            second: pair.second.label().to_string(),
        });
        self.publish(SessionEvent::RoundStateChanged(RoundState::Idle));
        DrawOutcome::Committed(pair)
    }
}
