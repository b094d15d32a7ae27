//! Workout identity - "{week}-{day}" tokens used for completion tracking

use std::fmt;
use std::str::FromStr;

use super::cycle::{FIRST_WEEK, LAST_WEEK};

/// Barbell lifts driven by the percentage engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lift {
    Squat,
    Bench,
    Deadlift,
}

impl Lift {
    pub fn key(&self) -> &'static str {
        match self {
            Lift::Squat => "squat",
            Lift::Bench => "bench",
            Lift::Deadlift => "deadlift",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Lift::Squat => "Squat",
            Lift::Bench => "Bench Press",
            Lift::Deadlift => "Deadlift",
        }
    }

    /// Lifts in display order
    pub fn all() -> &'static [Lift] {
        &[Lift::Squat, Lift::Bench, Lift::Deadlift]
    }

    pub fn from_key(key: &str) -> Option<Lift> {
        Lift::all().iter().copied().find(|l| l.key() == key)
    }
}

impl fmt::Display for Lift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Lift {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lift::from_key(&s.to_lowercase()).ok_or_else(|| {
            let keys: Vec<_> = Lift::all().iter().map(|l| l.key()).collect();
            format!("unknown lift '{}' (expected one of: {})", s, keys.join(", "))
        })
    }
}

/// A training day slot: one of the main lifts or the weighted pull-up day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutDay {
    Lift(Lift),
    /// 5x5 at a fixed added weight, outside the percentage engine
    WeightedPullups,
}

impl WorkoutDay {
    pub fn key(&self) -> &'static str {
        match self {
            WorkoutDay::Lift(lift) => lift.key(),
            WorkoutDay::WeightedPullups => "weighted-pullups",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkoutDay::Lift(lift) => lift.label(),
            WorkoutDay::WeightedPullups => "Weighted Pull-Ups",
        }
    }

    /// Days in display order
    pub fn all() -> &'static [WorkoutDay] {
        &[
            WorkoutDay::Lift(Lift::Squat),
            WorkoutDay::Lift(Lift::Bench),
            WorkoutDay::Lift(Lift::Deadlift),
            WorkoutDay::WeightedPullups,
        ]
    }

    pub fn from_key(key: &str) -> Option<WorkoutDay> {
        WorkoutDay::all().iter().copied().find(|d| d.key() == key)
    }

    pub fn lift(&self) -> Option<Lift> {
        match self {
            WorkoutDay::Lift(lift) => Some(*lift),
            WorkoutDay::WeightedPullups => None,
        }
    }
}

impl From<Lift> for WorkoutDay {
    fn from(lift: Lift) -> Self {
        WorkoutDay::Lift(lift)
    }
}

/// Decoded workout identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkoutId {
    pub week: u8,
    pub day: WorkoutDay,
}

impl WorkoutId {
    pub fn new(week: u8, day: impl Into<WorkoutDay>) -> Self {
        Self { week, day: day.into() }
    }

    /// Title shown on the detail screen, e.g. "Week 3 - Bench Press"
    pub fn title(&self) -> String {
        format!("Week {} - {}", self.week, self.day.label())
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.week, self.day.key())
    }
}

/// Encode a (week, day) pair, e.g. `workout_id(3, Lift::Bench) == "3-bench"`
pub fn workout_id(week: u8, day: impl Into<WorkoutDay>) -> String {
    WorkoutId::new(week, day).to_string()
}

/// Decode a workout token. Returns `None` for anything that is not a
/// week in 1..=4 followed by a known day key.
///
/// Only the first hyphen separates the week; the remainder is the day key
/// as a whole, since `weighted-pullups` contains a hyphen itself.
///
/// The week must be bare ASCII digits: signs, spaces and decimals are
/// rejected even where they denote a valid number (`"+2-bench"`), because
/// `workout_id` never produces them.
pub fn parse_workout_id(id: &str) -> Option<WorkoutId> {
    let (week_part, day_part) = id.split_once('-')?;

    if week_part.is_empty() || !week_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let week: u8 = week_part.parse().ok()?;
    if !(FIRST_WEEK..=LAST_WEEK).contains(&week) {
        return None;
    }

    let day = WorkoutDay::from_key(day_part)?;
    Some(WorkoutId { week, day })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workout_id_format() {
        assert_eq!(workout_id(3, Lift::Bench), "3-bench");
        assert_eq!(workout_id(1, WorkoutDay::WeightedPullups), "1-weighted-pullups");
    }

    #[test]
    fn test_parse_workout_id_all_valid_pairs() {
        for week in 1..=4u8 {
            for day in WorkoutDay::all() {
                let id = workout_id(week, *day);
                assert_eq!(
                    parse_workout_id(&id),
                    Some(WorkoutId { week, day: *day }),
                    "failed for {}",
                    id
                );
            }
        }
    }

    #[test]
    fn test_parse_workout_id_week_out_of_range() {
        assert_eq!(parse_workout_id("5-bench"), None);
        assert_eq!(parse_workout_id("0-squat"), None);
        assert_eq!(parse_workout_id("-1-squat"), None);
    }

    #[test]
    fn test_parse_workout_id_unknown_day() {
        assert_eq!(parse_workout_id("2-curls"), None);
        assert_eq!(parse_workout_id("2-weighted"), None);
        assert_eq!(parse_workout_id("2-Bench"), None);
    }

    #[test]
    fn test_parse_workout_id_malformed() {
        assert_eq!(parse_workout_id(""), None);
        assert_eq!(parse_workout_id("bench"), None);
        assert_eq!(parse_workout_id("3"), None);
        assert_eq!(parse_workout_id("3-"), None);
        assert_eq!(parse_workout_id("1.5-bench"), None);
        assert_eq!(parse_workout_id("3-bench-extra"), None);
    }

    #[test]
    fn test_parse_workout_id_week_is_bare_digits() {
        assert_eq!(parse_workout_id("+2-bench"), None);
        assert_eq!(parse_workout_id(" 2-bench"), None);
        assert_eq!(parse_workout_id("02-bench"), Some(WorkoutId::new(2, Lift::Bench)));
    }

    #[test]
    fn test_workout_id_title() {
        assert_eq!(WorkoutId::new(2, Lift::Deadlift).title(), "Week 2 - Deadlift");
    }

    #[test]
    fn test_lift_from_str() {
        assert_eq!("squat".parse::<Lift>(), Ok(Lift::Squat));
        assert_eq!("BENCH".parse::<Lift>(), Ok(Lift::Bench));
        assert!("curl".parse::<Lift>().is_err());
    }

    #[test]
    fn test_day_lift() {
        assert_eq!(WorkoutDay::Lift(Lift::Squat).lift(), Some(Lift::Squat));
        assert_eq!(WorkoutDay::WeightedPullups.lift(), None);
    }
}
