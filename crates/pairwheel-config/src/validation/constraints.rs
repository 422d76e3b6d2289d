//! Validation for forbidden groups and the locked pair.

use pairwheel_common::Person;

use crate::schema::PairwheelConfig;

use super::helpers::normalize_names;

/// Each group needs at least two distinct members after normalization.
pub(crate) fn validate_forbidden_groups(errors: &mut Vec<String>, config: &PairwheelConfig) {
    for (idx, group) in config.constraints.forbidden_groups.iter().enumerate() {
        let name = format!("constraints.forbidden_groups[{idx}]");
        let (members, _) = normalize_names(errors, &name, group);
        if members.len() < 2 {
            errors.push(format!(
                "{name} needs at least 2 distinct members, has {}",
                members.len()
            ));
        }
    }
}

/// The locked pair must name two different people who are not forbidden
/// from being paired with each other.
pub(crate) fn validate_locked_pair(errors: &mut Vec<String>, config: &PairwheelConfig) {
    let Some([a, b]) = &config.constraints.locked_pair else {
        return;
    };
    let (Some(a), Some(b)) = (Person::parse(a), Person::parse(b)) else {
        errors.push("constraints.locked_pair contains an empty name".into());
        return;
    };
    if a == b {
        errors.push(format!(
            "constraints.locked_pair names '{}' twice",
            a.key()
        ));
        return;
    }
    let conflicting = config.constraints.forbidden_groups.iter().any(|group| {
        group.iter().any(|m| a.matches(m)) && group.iter().any(|m| b.matches(m))
    });
    if conflicting {
        errors.push(format!(
            "constraints.locked_pair ('{}', '{}') is also a forbidden pairing",
            a.key(),
            b.key()
        ));
    }
}
