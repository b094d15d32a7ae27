//! Training max derivation

use super::numeric::{finite_or_zero, to_whole_lbs};
use super::workout_id::Lift;
use crate::state::Maxes;

/// Share of the one-rep max used as the training max
pub const TRAINING_MAX_RATIO: f64 = 0.9;

/// 90% of a one-rep max; invalid input counts as 0
pub fn training_max(one_rep_max: f64) -> f64 {
    finite_or_zero(one_rep_max) * TRAINING_MAX_RATIO
}

/// Training max as stored when derived from a 1RM (nearest whole lb)
pub fn rounded_training_max(one_rep_max: f64) -> u32 {
    to_whole_lbs(training_max(one_rep_max))
}

pub fn training_max_for_lift(maxes: &Maxes, lift: Lift) -> u32 {
    maxes.get(lift)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_training_max_is_ninety_percent() {
        for x in [0.0, 100.0, 225.0, 315.5, 1000.0] {
            assert!((training_max(x) - x * 0.9).abs() < 1e-9, "failed for {}", x);
        }
    }

    #[test]
    fn test_training_max_invalid_input() {
        assert_eq!(training_max(f64::NAN), 0.0);
        assert_eq!(training_max(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_rounded_training_max() {
        assert_eq!(rounded_training_max(225.0), 203); // 202.5
        assert_eq!(rounded_training_max(300.0), 270);
        assert_eq!(rounded_training_max(f64::NAN), 0);
    }

    #[test]
    fn test_training_max_for_lift() {
        let maxes = Maxes::default().with(Lift::Deadlift, 405);
        assert_eq!(training_max_for_lift(&maxes, Lift::Deadlift), 405);
        assert_eq!(training_max_for_lift(&maxes, Lift::Squat), 0);
    }
}
