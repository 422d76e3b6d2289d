//! Validation for draw timing and retry settings.

use crate::schema::PairwheelConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_draw(errors: &mut Vec<String>, config: &PairwheelConfig) {
    let draw = &config.draw;
    validate_range(errors, "draw.spin_duration_ms", draw.spin_duration_ms, 0, 60_000);
    validate_range(errors, "draw.pick_delay_ms", draw.pick_delay_ms, 0, 10_000);
    validate_range(errors, "draw.max_attempts", u64::from(draw.max_attempts), 1, 1000);
    validate_range(
        errors,
        "draw.max_round_restarts",
        u64::from(draw.max_round_restarts),
        0,
        1000,
    );
    validate_range_f64(errors, "draw.min_spins", draw.min_spins, 1.0, 50.0);
    validate_range_f64(errors, "draw.max_spins", draw.max_spins, 1.0, 50.0);
    if draw.min_spins > draw.max_spins {
        errors.push(format!(
            "draw.min_spins = {} is greater than draw.max_spins = {}",
            draw.min_spins, draw.max_spins
        ));
    }
}
