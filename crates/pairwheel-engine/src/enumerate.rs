//! Legal pair enumeration.

use pairwheel_common::Person;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::constraints::ConstraintSet;
use crate::pair::{CandidatePair, LockedPair};

/// List every legal pair in `pool`.
///
/// If `locked` is set and both of its members are present, it comes first
/// and neither member appears in any other pair. The remaining pairs are
/// all `(pool[i], pool[j])` with `i < j` that the constraints allow,
/// shuffled with Fisher–Yates; each pair's announcement order is also
/// randomized so earlier-added people are not always drawn first.
pub fn enumerate<R: Rng>(
    pool: &[Person],
    constraints: &ConstraintSet,
    locked: Option<&LockedPair>,
    rng: &mut R,
) -> Vec<CandidatePair> {
    if pool.len() < 2 {
        return Vec::new();
    }

    let mut head = None;
    let mut working: Vec<&Person> = pool.iter().collect();

    if let Some(locked) = locked {
        let (a, b) = locked.members();
        if pool.contains(a) && pool.contains(b) {
            if constraints.is_forbidden(a, b) {
                warn!(pair = %locked, "locked pair is forbidden, ignoring lock");
            } else {
                working.retain(|p| !locked.contains(p));
                head = Some(locked.to_candidate());
            }
        }
    }

    let mut pairs = Vec::new();
    for (i, a) in working.iter().enumerate() {
        for b in &working[i + 1..] {
            if !constraints.is_forbidden(a, b) {
                pairs.push(CandidatePair::new((*a).clone(), (*b).clone()));
            }
        }
    }

    pairs.shuffle(rng);
    let mut ordered: Vec<CandidatePair> = head.into_iter().chain(pairs).collect();
    for pair in &mut ordered {
        if rng.gen_bool(0.5) {
            std::mem::swap(&mut pair.first, &mut pair.second);
        }
    }

    debug!(pool = pool.len(), pairs = ordered.len(), "enumerated candidate pairs");
    ordered
}
