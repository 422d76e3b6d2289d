use std::fmt;

use pairwheel_common::{PairingError, Person};
use serde::{Deserialize, Serialize};

/// Two distinct people who may legally be paired.
///
/// Equality ignores order; `first` and `second` only record which member
/// is announced first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidatePair {
    pub first: Person,
    pub second: Person,
}

impl CandidatePair {
    pub fn new(first: Person, second: Person) -> Self {
        Self { first, second }
    }

    pub fn contains(&self, person: &Person) -> bool {
        self.first == *person || self.second == *person
    }

    /// The partner of `person`, if `person` is in this pair.
    pub fn other(&self, person: &Person) -> Option<&Person> {
        if self.first == *person {
            Some(&self.second)
        } else if self.second == *person {
            Some(&self.first)
        } else {
            None
        }
    }

    /// Same members, announced the other way round.
    pub fn swapped(self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }
}

impl PartialEq for CandidatePair {
    fn eq(&self, other: &Self) -> bool {
        (self.first == other.first && self.second == other.second)
            || (self.first == other.second && self.second == other.first)
    }
}

impl Eq for CandidatePair {}

impl fmt::Display for CandidatePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} & {}", self.first, self.second)
    }
}

/// A pair that must be announced before anything else whenever both
/// members are in the pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockedPair {
    a: Person,
    b: Person,
}

impl LockedPair {
    pub fn new(a: Person, b: Person) -> Result<Self, PairingError> {
        if a == b {
            return Err(PairingError::DuplicatePerson(a.label().to_string()));
        }
        Ok(Self { a, b })
    }

    pub fn from_names(a: &str, b: &str) -> Result<Self, PairingError> {
        let a = Person::parse(a).ok_or(PairingError::EmptyName)?;
        let b = Person::parse(b).ok_or(PairingError::EmptyName)?;
        Self::new(a, b)
    }

    pub fn members(&self) -> (&Person, &Person) {
        (&self.a, &self.b)
    }

    pub fn contains(&self, person: &Person) -> bool {
        self.a == *person || self.b == *person
    }

    pub fn to_candidate(&self) -> CandidatePair {
        CandidatePair::new(self.a.clone(), self.b.clone())
    }
}

impl fmt::Display for LockedPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} & {}", self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(name: &str) -> Person {
        Person::parse(name).unwrap()
    }

    #[test]
    fn pair_equality_is_unordered() {
        let ab = CandidatePair::new(p("a"), p("b"));
        let ba = CandidatePair::new(p("B"), p("a"));
        assert_eq!(ab, ba);
        assert_ne!(ab, CandidatePair::new(p("a"), p("c")));
    }

    #[test]
    fn other_returns_partner() {
        let pair = CandidatePair::new(p("jake"), p("pranavi"));
        assert_eq!(pair.other(&p("jake")), Some(&p("pranavi")));
        assert_eq!(pair.other(&p("pranavi")), Some(&p("jake")));
        assert_eq!(pair.other(&p("nathan")), None);
        assert!(pair.contains(&p("JAKE")));
    }

    #[test]
    fn swapped_keeps_members() {
        let pair = CandidatePair::new(p("a"), p("b")).swapped();
        assert_eq!(pair.first, p("b"));
        assert_eq!(pair.second, p("a"));
    }

    #[test]
    fn display_uses_labels() {
        let pair = CandidatePair::new(p("Jake"), p("Pranavi"));
        assert_eq!(pair.to_string(), "Jake & Pranavi");
    }

    #[test]
    fn locked_pair_rejects_same_person() {
        let err = LockedPair::from_names("Jake", " jake").unwrap_err();
        assert_eq!(err, PairingError::DuplicatePerson("Jake".into()));
    }

    #[test]
    fn locked_pair_rejects_blank() {
        assert_eq!(
            LockedPair::from_names("jake", " ").unwrap_err(),
            PairingError::EmptyName
        );
    }

    #[test]
    fn locked_pair_contains_members() {
        let locked = LockedPair::from_names("jake", "pranavi").unwrap();
        assert!(locked.contains(&p("Jake")));
        assert!(!locked.contains(&p("nathan")));
        assert_eq!(
            locked.to_candidate(),
            CandidatePair::new(p("pranavi"), p("jake"))
        );
    }

    #[test]
    fn pair_serializes_as_labels() {
        let pair = CandidatePair::new(p("Jake"), p("Pranavi"));
        let json = serde_json::to_string(&pair).unwrap();
        assert_eq!(json, r#"{"first":"Jake","second":"Pranavi"}"#);

        let back: CandidatePair = serde_json::from_str(r#"{"first":" jake ","second":"PRANAVI"}"#).unwrap();
        assert_eq!(back, pair);
    }
}
