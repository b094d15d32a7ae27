//! Prescribed set weights for a workout

use super::cycle::{find_week, WorkoutSet};
use super::numeric::{round_to_five, to_whole_lbs};
use super::workout_id::{WorkoutDay, WorkoutId};
use crate::state::Maxes;

/// Sets x reps on the weighted pull-up day
pub const PULLUP_SETS: usize = 5;
pub const PULLUP_REPS: &str = "5";

/// A set ready for display: weight in lbs plus the rep target
#[derive(Debug, Clone, PartialEq)]
pub struct PrescribedSet {
    pub weight: u32,
    pub reps: &'static str,
    pub amrap: bool,
    /// Share of the training max, `None` for fixed-weight days
    pub percent: Option<f64>,
}

impl PrescribedSet {
    /// "255 x 5+ (AMRAP)"
    pub fn describe(&self) -> String {
        let amrap = if self.amrap { " (AMRAP)" } else { "" };
        format!("{} x {}{}", self.weight, self.reps, amrap)
    }
}

/// `round(tm * percent / 5) * 5`; a non-finite training max counts as 0
pub fn calculate_set_weight(training_max: f64, percent: f64) -> u32 {
    to_whole_lbs(round_to_five(training_max * percent))
}

fn prescribe_set(training_max: u32, set: &WorkoutSet) -> PrescribedSet {
    PrescribedSet {
        weight: calculate_set_weight(f64::from(training_max), set.percent),
        reps: set.reps,
        amrap: set.amrap,
        percent: Some(set.percent),
    }
}

/// Sets for a given week and day using the current maxes.
///
/// Recomputed on every call. An unknown week yields no sets.
pub fn prescribe(week: u8, day: WorkoutDay, maxes: &Maxes) -> Vec<PrescribedSet> {
    let Some(workout_week) = find_week(week) else {
        return Vec::new();
    };

    match day {
        WorkoutDay::Lift(lift) => {
            let tm = maxes.get(lift);
            workout_week.sets.iter().map(|s| prescribe_set(tm, s)).collect()
        }
        WorkoutDay::WeightedPullups => (0..PULLUP_SETS)
            .map(|_| PrescribedSet {
                weight: maxes.weighted_pullup_weight,
                reps: PULLUP_REPS,
                amrap: false,
                percent: None,
            })
            .collect(),
    }
}

pub fn prescribe_workout(id: &WorkoutId, maxes: &Maxes) -> Vec<PrescribedSet> {
    prescribe(id.week, id.day, maxes)
}
