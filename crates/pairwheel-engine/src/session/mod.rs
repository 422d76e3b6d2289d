//! The pairing session: pool, queue and the round state machine.
//!
//! A round moves `Idle -> AwaitingFirst -> AwaitingSecond -> Idle`, or
//! `Idle -> FinalPair -> Idle` when only two people are left. Which pair is
//! announced is fixed by the queue when the round starts; draw results only
//! have to agree with it.

mod driver;
mod roster;
mod round;
mod types;


pub use types::*;
