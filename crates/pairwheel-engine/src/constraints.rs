//! Forbidden groups: sets of people no two of whom may be paired.

use std::collections::HashSet;

use pairwheel_common::Person;
use pairwheel_config::ConstraintsConfig;
use tracing::warn;

/// Normalized, immutable forbidden groups.
///
/// Built once from configuration. Members are normalized at construction
/// with [`Person::parse`], the same rule the pool uses, so lookups never
/// re-derive keys on their own.
#[derive(Debug, Clone, Default)]
pub struct ConstraintSet {
    groups: Vec<HashSet<Person>>,
}

impl ConstraintSet {
    /// A set with no restrictions.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from raw name groups. Blank names are skipped and groups left
    /// with fewer than two distinct members are dropped, with a warning.
    pub fn from_groups<G, S>(groups: impl IntoIterator<Item = G>) -> Self
    where
        G: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized = Vec::new();
        for (idx, group) in groups.into_iter().enumerate() {
            let members: HashSet<Person> = group
                .into_iter()
                .filter_map(|name| Person::parse(name.as_ref()))
                .collect();
            if members.len() < 2 {
                warn!(group = idx, "ignoring forbidden group with fewer than 2 members");
                continue;
            }
            normalized.push(members);
        }
        Self { groups: normalized }
    }

    pub fn from_config(config: &ConstraintsConfig) -> Self {
        Self::from_groups(&config.forbidden_groups)
    }

    /// True iff some group contains both `a` and `b`.
    pub fn is_forbidden(&self, a: &Person, b: &Person) -> bool {
        a != b
            && self
                .groups
                .iter()
                .any(|group| group.contains(a) && group.contains(b))
    }

    /// [`is_forbidden`](Self::is_forbidden) for raw names.
    pub fn is_forbidden_names(&self, a: &str, b: &str) -> bool {
        match (Person::parse(a), Person::parse(b)) {
            (Some(a), Some(b)) => self.is_forbidden(&a, &b),
            _ => false,
        }
    }

    pub fn groups(&self) -> &[HashSet<Person>] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
