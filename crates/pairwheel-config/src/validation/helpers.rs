//! Shared helpers used by the section validators.

use std::collections::HashSet;

use pairwheel_common::Person;

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u64, min: u64, max: u64) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `[min, max]` (float).
pub(crate) fn validate_range_f64(
    errors: &mut Vec<String>,
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Normalize a list of names, reporting blanks. Returns the distinct
/// normalized members in first-seen order and the duplicates found.
pub(crate) fn normalize_names(
    errors: &mut Vec<String>,
    name: &str,
    raw: &[String],
) -> (Vec<Person>, Vec<Person>) {
    let mut seen = HashSet::new();
    let mut members = Vec::new();
    let mut duplicates = Vec::new();
    for (idx, entry) in raw.iter().enumerate() {
        match Person::parse(entry) {
            Some(person) => {
                if seen.insert(person.clone()) {
                    members.push(person);
                } else {
                    duplicates.push(person);
                }
            }
            None => errors.push(format!("{name}[{idx}] is empty")),
        }
    }
    (members, duplicates)
}
