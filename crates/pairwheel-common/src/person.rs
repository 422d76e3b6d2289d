//! Participant identity and the single name-normalization rule.
//!
//! Every place that compares names (pool membership, forbidden groups, the
//! locked pair, config validation) goes through [`Person::parse`] so the
//! rule cannot drift between call sites.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::errors::PairingError;

/// A participant, identified by a case-normalized key.
///
/// The key is the trimmed name in lowercase. The label keeps the trimmed
/// spelling as it was first entered and is only used for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Person {
    key: String,
    label: String,
}

impl Person {
    /// Normalize a raw name. Returns `None` when nothing is left after trimming.
    pub fn parse(raw: &str) -> Option<Self> {
        let label = raw.trim();
        if label.is_empty() {
            return None;
        }
        Some(Self {
            key: Self::normalize(label),
            label: label.to_string(),
        })
    }

    /// The normalization rule on its own: trim, then lowercase.
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_lowercase()
    }

    /// The comparison key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The name as entered (trimmed).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether `raw` names this person after normalization.
    pub fn matches(&self, raw: &str) -> bool {
        self.key == Self::normalize(raw)
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for Person {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Person {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl TryFrom<String> for Person {
    type Error = PairingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or(PairingError::EmptyName)
    }
}

impl From<Person> for String {
    fn from(person: Person) -> Self {
        person.label
    }
}
