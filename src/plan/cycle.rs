//! The 4-week 5/3/1 cycle table

pub const FIRST_WEEK: u8 = 1;
pub const LAST_WEEK: u8 = 4;

/// One working set as a percentage of the training max
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutSet {
    pub percent: f64,
    /// Rep target as displayed ("5", "3+", ...)
    pub reps: &'static str,
    pub amrap: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutWeek {
    pub week: u8,
    pub label: &'static str,
    pub sets: &'static [WorkoutSet],
}

impl WorkoutWeek {
    pub fn has_amrap(&self) -> bool {
        self.sets.iter().any(|s| s.amrap)
    }

    /// Label with a trailing "+" when the week ends in an AMRAP set
    pub fn scheme_label(&self) -> String {
        if self.has_amrap() {
            format!("{}+", self.label)
        } else {
            self.label.to_string()
        }
    }
}

const fn set(percent: f64, reps: &'static str) -> WorkoutSet {
    WorkoutSet { percent, reps, amrap: false }
}

const fn amrap(percent: f64, reps: &'static str) -> WorkoutSet {
    WorkoutSet { percent, reps, amrap: true }
}

pub const WORKOUT_WEEKS: &[WorkoutWeek] = &[
    WorkoutWeek {
        week: 1,
        label: "5/5/5",
        sets: &[set(0.65, "5"), set(0.75, "5"), amrap(0.85, "5+")],
    },
    WorkoutWeek {
        week: 2,
        label: "3/3/3",
        sets: &[set(0.70, "3"), set(0.80, "3"), amrap(0.90, "3+")],
    },
    WorkoutWeek {
        week: 3,
        label: "5/3/1",
        sets: &[set(0.75, "5"), set(0.85, "3"), amrap(0.95, "1+")],
    },
    WorkoutWeek {
        week: 4,
        label: "Deload",
        sets: &[set(0.40, "5"), set(0.50, "5"), set(0.60, "5")],
    },
];

pub fn find_week(week: u8) -> Option<&'static WorkoutWeek> {
    WORKOUT_WEEKS.iter().find(|w| w.week == week)
}

/// Sets for a week; empty for an unknown week number
pub fn week_sets(week: u8) -> &'static [WorkoutSet] {
    find_week(week).map(|w| w.sets).unwrap_or(&[])
}
