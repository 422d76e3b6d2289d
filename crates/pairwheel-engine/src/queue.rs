//! The precomputed order in which legal pairs are announced.

use std::collections::VecDeque;

use pairwheel_common::Person;
use rand::Rng;

use crate::constraints::ConstraintSet;
use crate::enumerate::enumerate;
use crate::pair::{CandidatePair, LockedPair};

/// Shuffled legal pairs, consumed front to back.
///
/// Never patched in place: any change to the pool, constraints or locked
/// pair throws the whole queue away and enumerates again, so an entry can
/// never refer to someone who has left.
#[derive(Debug, Clone, Default)]
pub struct DrawQueue {
    entries: VecDeque<CandidatePair>,
}

impl DrawQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a queue for the given state.
    pub fn build<R: Rng>(
        pool: &[Person],
        constraints: &ConstraintSet,
        locked: Option<&LockedPair>,
        rng: &mut R,
    ) -> Self {
        Self {
            entries: enumerate(pool, constraints, locked, rng).into(),
        }
    }

    /// Discard the current entries and enumerate again.
    pub fn regenerate<R: Rng>(
        &mut self,
        pool: &[Person],
        constraints: &ConstraintSet,
        locked: Option<&LockedPair>,
        rng: &mut R,
    ) {
        *self = Self::build(pool, constraints, locked, rng);
    }

    pub fn peek(&self) -> Option<&CandidatePair> {
        self.entries.front()
    }

    pub fn pop(&mut self) -> Option<CandidatePair> {
        self.entries.pop_front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CandidatePair> {
        self.entries.iter()
    }

    /// Whether any entry mentions `person`.
    pub fn mentions(&self, person: &Person) -> bool {
        self.entries.iter().any(|pair| pair.contains(person))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn people(names: &[&str]) -> Vec<Person> {
        names.iter().map(|n| Person::parse(n).unwrap()).collect()
    }

    #[test]
    fn new_queue_is_empty() {
        let queue = DrawQueue::new();
        assert!(queue.is_empty());
        assert!(queue.peek().is_none());
    }

    #[test]
    fn pop_consumes_in_peek_order() {
        let mut rng = StdRng::seed_from_u64(1);
        let pool = people(&["a", "b", "c"]);
        let mut queue = DrawQueue::build(&pool, &ConstraintSet::empty(), None, &mut rng);
        assert_eq!(queue.len(), 3);

        let head = queue.peek().cloned().unwrap();
        assert_eq!(queue.pop(), Some(head));
        assert_eq!(queue.len(), 2);

        let snapshot: Vec<CandidatePair> = queue.iter().cloned().collect();
        assert_eq!(queue.pop().as_ref(), snapshot.first());
        assert_eq!(queue.pop().as_ref(), snapshot.get(1));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn regenerate_drops_removed_members() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut pool = people(&["a", "b", "c", "d"]);
        let set = ConstraintSet::empty();
        let mut queue = DrawQueue::build(&pool, &set, None, &mut rng);
        let gone = pool.remove(0);
        assert!(queue.mentions(&gone));

        queue.regenerate(&pool, &set, None, &mut rng);
        assert_eq!(queue.len(), 3);
        assert!(!queue.mentions(&gone));
    }

    #[test]
    fn locked_pair_is_at_the_head() {
        let mut rng = StdRng::seed_from_u64(3);
        let pool = people(&["jake", "pranavi", "nathan"]);
        let locked = LockedPair::from_names("pranavi", "jake").unwrap();
        let queue = DrawQueue::build(&pool, &ConstraintSet::empty(), Some(&locked), &mut rng);
        assert_eq!(queue.peek(), Some(&locked.to_candidate()));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn clear_empties_queue() {
        let mut rng = StdRng::seed_from_u64(4);
        let pool = people(&["a", "b"]);
        let mut queue = DrawQueue::build(&pool, &ConstraintSet::empty(), None, &mut rng);
        queue.clear();
        assert!(queue.is_empty());
    }
}
