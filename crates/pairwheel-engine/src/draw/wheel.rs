//! Spinning wheel draw.
//!
//! The wheel is split into `n` equal segments, the first starting at the
//! top and running clockwise. The pointer sits on the right-hand side, so
//! after a spin the landed segment is derived from the final rotation.

use std::time::Duration;

use async_trait::async_trait;
use pairwheel_common::Person;
use pairwheel_config::DrawConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::{DrawError, RandomDraw};

/// Keeps a hinted landing away from segment edges.
const EDGE_MARGIN: f64 = 0.15;

/// Angle covered by each of `n` segments, in degrees.
pub fn segment_angle(n: usize) -> f64 {
    360.0 / n as f64
}

/// Index of the segment under the pointer for a wheel rotated by
/// `final_angle` degrees (clockwise). `None` for a wheel with no segments.
pub fn landed_index(final_angle: f64, n: usize) -> Option<usize> {
    if n == 0 {
        return None;
    }
    let pointer_angle = (360.0 - final_angle + 90.0).rem_euclid(360.0);
    Some((pointer_angle / segment_angle(n)).floor() as usize % n)
}

/// Rotation (mod 360) that puts the pointer `fraction` of the way into
/// segment `index`.
fn rotation_for(index: usize, n: usize, fraction: f64) -> f64 {
    let pointer_angle = (index as f64 + fraction) * segment_angle(n);
    (450.0 - pointer_angle).rem_euclid(360.0)
}

#[derive(Debug, Clone)]
pub struct WheelSettings {
    pub spin_duration: Duration,
    pub min_spins: f64,
    pub max_spins: f64,
    pub honor_target_hint: bool,
    pub seed: Option<u64>,
}

impl WheelSettings {
    pub fn from_config(draw: &DrawConfig, seed: Option<u64>) -> Self {
        Self {
            spin_duration: Duration::from_millis(draw.spin_duration_ms),
            min_spins: draw.min_spins,
            max_spins: draw.max_spins.max(draw.min_spins),
            honor_target_hint: draw.honor_target_hint,
            seed,
        }
    }
}

impl Default for WheelSettings {
    fn default() -> Self {
        Self::from_config(&DrawConfig::default(), None)
    }
}

/// A wheel that spins several full turns and settles on one segment.
pub struct WheelDraw {
    settings: WheelSettings,
    rng: StdRng,
    rotation: f64,
}

impl WheelDraw {
    pub fn new(settings: WheelSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            settings,
            rng,
            rotation: 0.0,
        }
    }

    /// Accumulated rotation in degrees.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Advance the wheel and return the landed segment for `n` segments.
    /// With a `target`, the final angle is chosen inside that segment; a
    /// target past the last segment is ignored. An empty wheel does not move.
    pub fn spin(&mut self, n: usize, target: Option<usize>) -> Option<usize> {
        if n == 0 {
            return None;
        }
        let (lo, hi) = (self.settings.min_spins, self.settings.max_spins);
        let turns = self.rng.gen_range(lo.min(hi)..=hi.max(lo));
        let base = self.rotation + turns * 360.0;
        let settle = match target.filter(|&index| index < n) {
            Some(index) => {
                let fraction = self.rng.gen_range(EDGE_MARGIN..=1.0 - EDGE_MARGIN);
                (rotation_for(index, n, fraction) - base.rem_euclid(360.0)).rem_euclid(360.0)
            }
            None => self.rng.gen_range(0.0..360.0),
        };
        self.rotation = base + settle;
        landed_index(self.rotation.rem_euclid(360.0), n)
    }
}

#[async_trait]
impl RandomDraw for WheelDraw {
    async fn draw(
        &mut self,
        candidates: &[Person],
        target_hint: Option<&Person>,
    ) -> Result<Person, DrawError> {
        if candidates.is_empty() {
            return Err(DrawError::EmptyCandidates);
        }
        let target = if self.settings.honor_target_hint {
            target_hint.and_then(|hint| candidates.iter().position(|c| c == hint))
        } else {
            None
        };

        let index = self
            .spin(candidates.len(), target)
            .ok_or(DrawError::EmptyCandidates)?;
        debug!(
            segments = candidates.len(),
            index,
            rotation = self.rotation,
            "wheel spinning"
        );
        if !self.settings.spin_duration.is_zero() {
            tokio::time::sleep(self.settings.spin_duration).await;
        }
        Ok(candidates[index].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people(names: &[&str]) -> Vec<Person> {
        names.iter().map(|n| Person::parse(n).unwrap()).collect()
    }

    fn instant(seed: u64, honor: bool) -> WheelDraw {
        WheelDraw::new(WheelSettings {
            spin_duration: Duration::ZERO,
            min_spins: 5.0,
            max_spins: 10.0,
            honor_target_hint: honor,
            seed: Some(seed),
        })
    }

    #[test]
    fn segment_angles() {
        assert!((segment_angle(4) - 90.0).abs() < 1e-9);
        assert!((segment_angle(3) - 120.0).abs() < 1e-9);
    }

    #[test]
    fn unrotated_wheel_points_at_second_quarter() {
        // Pointer on the right is 90 degrees clockwise from the top.
        assert_eq!(landed_index(0.0, 4), Some(1));
        assert_eq!(landed_index(0.0, 2), Some(0));
    }

    #[test]
    fn rotating_moves_earlier_segments_under_pointer() {
        assert_eq!(landed_index(90.0, 4), Some(0));
        assert_eq!(landed_index(180.0, 4), Some(3));
        assert_eq!(landed_index(270.0, 4), Some(2));
    }

    #[test]
    fn single_segment_always_lands() {
        for angle in [0.0, 45.0, 359.9] {
            assert_eq!(landed_index(angle, 1), Some(0));
        }
    }

    #[test]
    fn rotation_for_lands_on_requested_segment() {
        for n in 1..12 {
            for index in 0..n {
                for fraction in [0.15, 0.5, 0.85] {
                    assert_eq!(landed_index(rotation_for(index, n, fraction), n), Some(index));
                }
            }
        }
    }

    #[test]
    fn targeted_spins_hit_target_and_keep_turning() {
        let mut wheel = instant(11, true);
        let mut last = wheel.rotation();
        for round in 0..50 {
            let target = round % 7;
            assert_eq!(wheel.spin(7, Some(target)), Some(target));
            assert!(wheel.rotation() - last >= 5.0 * 360.0);
            last = wheel.rotation();
        }
    }

    #[test]
    fn untargeted_spins_cover_every_segment() {
        let mut wheel = instant(5, false);
        let mut seen = [false; 5];
        for _ in 0..200 {
            seen[wheel.spin(5, None).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn empty_wheel_has_no_landing() {
        assert_eq!(landed_index(0.0, 0), None);
        let mut wheel = instant(2, true);
        assert_eq!(wheel.spin(0, None), None);
        assert_eq!(wheel.spin(0, Some(0)), None);
        assert_eq!(wheel.rotation(), 0.0);
    }

    #[test]
    fn out_of_range_target_still_lands_on_wheel() {
        let mut wheel = instant(4, true);
        for _ in 0..20 {
            assert!(wheel.spin(3, Some(9)).unwrap() < 3);
        }
    }

    #[tokio::test]
    async fn draw_honors_hint() {
        let mut wheel = instant(3, true);
        let candidates = people(&["a", "b", "c", "d"]);
        for target in &candidates {
            let drawn = wheel.draw(&candidates, Some(target)).await.unwrap();
            assert_eq!(&drawn, target);
        }
    }

    #[tokio::test]
    async fn draw_ignores_hint_outside_candidates() {
        let mut wheel = instant(3, true);
        let candidates = people(&["a", "b"]);
        let hint = Person::parse("z").unwrap();
        let drawn = wheel.draw(&candidates, Some(&hint)).await.unwrap();
        assert!(candidates.contains(&drawn));
    }

    #[tokio::test]
    async fn draw_from_empty_fails() {
        let mut wheel = instant(3, true);
        assert_eq!(
            wheel.draw(&[], None).await.unwrap_err(),
            DrawError::EmptyCandidates
        );
    }

    #[test]
    fn settings_from_config() {
        let config = DrawConfig {
            spin_duration_ms: 250,
            min_spins: 8.0,
            max_spins: 3.0,
            ..DrawConfig::default()
        };
        let settings = WheelSettings::from_config(&config, Some(9));
        assert_eq!(settings.spin_duration, Duration::from_millis(250));
        assert_eq!(settings.max_spins, 8.0);
        assert_eq!(settings.seed, Some(9));
    }
}
