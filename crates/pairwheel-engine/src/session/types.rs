//! Core types and constructors for PairingSession.

use std::fmt;
use std::time::Duration;

use pairwheel_common::{
    EventBus, PairingError, Person, RoundState, SessionEvent, SessionId,
};
use pairwheel_config::PairwheelConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::constraints::ConstraintSet;
use crate::pair::{CandidatePair, LockedPair};
use crate::pool::Pool;
use crate::queue::DrawQueue;

/// Identifies one round; draw results must carry the id of the round that
/// requested them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoundId(pub u64);

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Tunables for a session.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    /// Pause before the second draw of a round.
    pub pick_delay: Duration,
    /// Draws per pick before the round is abandoned.
    pub max_attempts: u32,
    /// Stalled rounds started again by [`PairingSession::run_pair`] before
    /// the stall is returned.
    pub max_round_restarts: u32,
    /// Seed for queue shuffles.
    pub seed: Option<u64>,
}

impl SessionSettings {
    pub fn from_config(config: &PairwheelConfig) -> Self {
        Self {
            pick_delay: Duration::from_millis(config.draw.pick_delay_ms),
            max_attempts: config.draw.max_attempts.max(1),
            max_round_restarts: config.draw.max_round_restarts,
            seed: config.session.seed,
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::from_config(&PairwheelConfig::default())
    }
}

/// A draw the caller must perform and report back through
/// [`PairingSession::on_draw_result`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawRequest {
    pub round: RoundId,
    /// Everyone currently on the wheel.
    pub candidates: Vec<Person>,
    /// Who the session will accept, when it cares.
    pub target: Option<Person>,
    /// Wait this long before drawing.
    pub delay: Duration,
    /// 1 for the first draw of a pick, higher for re-draws.
    pub attempt: u32,
}

/// Result of asking for a new round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundStart {
    /// Round started; perform this draw.
    Draw(DrawRequest),
    /// Nothing can be paired.
    NoLegalPairs { remaining: usize },
    /// A round is already running; nothing changed.
    AlreadyActive(RoundState),
}

/// What happened after a draw result was reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOutcome {
    /// The result was not the expected person; draw again.
    Redraw(DrawRequest),
    /// First pick accepted; perform the second draw.
    Next(DrawRequest),
    /// The round is over and this pair was committed.
    Committed(CandidatePair),
    /// Too many rejected draws; the round was abandoned.
    Stalled { attempts: u32 },
    /// The result belongs to a round that is no longer running.
    Stale,
}

/// Which pick an active round is waiting for.
#[derive(Debug, Clone)]
pub(super) enum Phase {
    First,
    Second { first: Person },
    Final,
}

/// Everything that exists only while a round is running.
#[derive(Debug, Clone)]
pub(super) struct ActiveRound {
    pub(super) id: RoundId,
    pub(super) phase: Phase,
    /// Queue head at the time the round started.
    pub(super) expected: CandidatePair,
    /// Pool members still shown on the wheel.
    pub(super) wheel: Vec<Person>,
    /// Draws issued for the current pick.
    pub(super) attempts: u32,
}

impl ActiveRound {
    pub(super) fn state(&self) -> RoundState {
        match self.phase {
            Phase::First => RoundState::AwaitingFirst,
            Phase::Second { .. } => RoundState::AwaitingSecond,
            Phase::Final => RoundState::FinalPair,
        }
    }

    /// The person the current pick must land on, if any.
    pub(super) fn target(&self) -> Option<&Person> {
        match self.phase {
            Phase::First => Some(&self.expected.first),
            Phase::Second { .. } => Some(&self.expected.second),
            Phase::Final => None,
        }
    }

    pub(super) fn request(&self, delay: Duration) -> DrawRequest {
        DrawRequest {
            round: self.id,
            candidates: self.wheel.clone(),
            target: self.target().cloned(),
            delay,
            attempt: self.attempts,
        }
    }
}

/// Runs pairing rounds over a pool of people.
///
/// All state lives here: the pool, the queue derived from it, and the
/// round in flight. Every transition reads this structure directly, so a
/// draw that resolves late always sees the current pool and queue.
pub struct PairingSession {
    pub(super) id: SessionId,
    pub(super) constraints: ConstraintSet,
    pub(super) locked: Option<LockedPair>,
    pub(super) pool: Pool,
    pub(super) queue: DrawQueue,
    pub(super) settings: SessionSettings,
    pub(super) rng: StdRng,
    pub(super) events: EventBus,
    pub(super) round: Option<ActiveRound>,
    pub(super) next_round: u64,
}

impl PairingSession {
    /// Create an empty session.
    pub fn new(
        constraints: ConstraintSet,
        locked: Option<LockedPair>,
        settings: SessionSettings,
    ) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let locked = locked.filter(|pair| {
            let (a, b) = pair.members();
            let legal = !constraints.is_forbidden(a, b);
            if !legal {
                warn!(pair = %pair, "locked pair is forbidden, dropping it");
            }
            legal
        });
        let session = Self {
            id: SessionId::new(),
            constraints,
            locked,
            pool: Pool::new(),
            queue: DrawQueue::new(),
            settings,
            rng,
            events: EventBus::default(),
            round: None,
            next_round: 1,
        };
        debug!(
            session = %session.id,
            groups = session.constraints.len(),
            locked = session.locked.is_some(),
            "pairing session created"
        );
        session
    }

    /// Build a session from configuration, including its initial pool.
    pub fn from_config(config: &PairwheelConfig) -> Result<Self, PairingError> {
        let constraints = ConstraintSet::from_config(&config.constraints);
        let locked = match &config.constraints.locked_pair {
            Some([a, b]) => Some(LockedPair::from_names(a, b)?),
            None => None,
        };
        if let Some(pair) = &locked {
            let (a, b) = pair.members();
            if constraints.is_forbidden(a, b) {
                return Err(PairingError::ForbiddenPair(
                    a.label().to_string(),
                    b.label().to_string(),
                ));
            }
        }
        let mut session = Self::new(constraints, locked, SessionSettings::from_config(config));
        for name in &config.pool.names {
            session.add_person(name)?;
        }
        Ok(session)
    }

    // -- Accessors --

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn state(&self) -> RoundState {
        self.round
            .as_ref()
            .map(ActiveRound::state)
            .unwrap_or(RoundState::Idle)
    }

    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    pub fn queue(&self) -> &DrawQueue {
        &self.queue
    }

    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    pub fn locked_pair(&self) -> Option<&LockedPair> {
        self.locked.as_ref()
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// The pair the current round will announce.
    pub fn expected_pair(&self) -> Option<&CandidatePair> {
        self.round.as_ref().map(|r| &r.expected)
    }

    /// The accepted first pick of the current round.
    pub fn first_pick(&self) -> Option<&Person> {
        match self.round.as_ref().map(|r| &r.phase) {
            Some(Phase::Second { first }) => Some(first),
            _ => None,
        }
    }

    /// Who is currently on the wheel: the pool, minus an accepted first pick.
    pub fn wheel(&self) -> Vec<Person> {
        match &self.round {
            Some(round) => round.wheel.clone(),
            None => self.pool.members().to_vec(),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    // -- Internal helpers --

    pub(super) fn publish(&self, event: SessionEvent) {
        self.events.publish(event);
    }

    pub(super) fn regenerate_queue(&mut self) {
        self.queue.regenerate(
            self.pool.members(),
            &self.constraints,
            self.locked.as_ref(),
            &mut self.rng,
        );
        debug!(
            session = %self.id,
            pool = self.pool.len(),
            queue = self.queue.len(),
            "draw queue regenerated"
        );
    }
}
