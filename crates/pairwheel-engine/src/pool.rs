//! The ordered set of people still waiting to be paired.

use pairwheel_common::{PairingError, Person};

use crate::pair::CandidatePair;

#[derive(Debug, Clone, Default)]
pub struct Pool {
    members: Vec<Person>,
}

impl Pool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `person` unless already present.
    pub fn add(&mut self, person: Person) -> Result<(), PairingError> {
        if self.contains(&person) {
            return Err(PairingError::DuplicatePerson(person.label().to_string()));
        }
        self.members.push(person);
        Ok(())
    }

    /// Remove `person`, returning the stored entry (with its original label).
    pub fn remove(&mut self, person: &Person) -> Result<Person, PairingError> {
        match self.members.iter().position(|m| m == person) {
            Some(idx) => Ok(self.members.remove(idx)),
            None => Err(PairingError::UnknownPerson(person.label().to_string())),
        }
    }

    /// Remove both members of a committed pair. Missing members are ignored.
    pub fn remove_pair(&mut self, pair: &CandidatePair) {
        self.members.retain(|m| !pair.contains(m));
    }

    pub fn contains(&self, person: &Person) -> bool {
        self.members.contains(person)
    }

    /// Look a member up by raw name.
    pub fn find(&self, name: &str) -> Option<&Person> {
        self.members.iter().find(|m| m.matches(name))
    }

    pub fn members(&self) -> &[Person] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }
}
