//! Pairing allocation engine.
//!
//! Draws participants from a pool two at a time while honouring forbidden
//! groups and an optional locked pair:
//! - `ConstraintSet` answers whether two people may be paired
//! - `enumerate` lists every legal pair, locked pair first, the rest shuffled
//! - `DrawQueue` holds that list and is rebuilt whenever the pool changes
//! - `PairingSession` runs the first-pick / second-pick state machine
//! - `RandomDraw` is the (usually animated) source of each pick

pub mod constraints;
pub mod draw;
pub mod enumerate;
pub mod pair;
pub mod pool;
pub mod queue;
pub mod session;

pub use constraints::ConstraintSet;
pub use draw::{DrawError, RandomDraw, ScriptedDraw, WheelDraw, WheelSettings};
pub use enumerate::enumerate;
pub use pair::{CandidatePair, LockedPair};
pub use pool::Pool;
pub use queue::DrawQueue;
pub use session::{
    DrawOutcome, DrawRequest, PairingSession, RoundId, RoundStart, SessionSettings,
};
