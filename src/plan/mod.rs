//! Plan module - 5/3/1 workout computation
//!
//! Pure, total functions: invalid numeric input becomes 0, unknown weeks
//! give no sets and unknown workout ids give `None`.
//!
//! - Training max from a one-rep max
//! - The 4-week cycle table
//! - Set weights rounded to 5 lbs
//! - Plate math per side of the bar
//! - Workout id encoding

pub mod cycle;
pub mod numeric;
pub mod plates;
pub mod sets;
pub mod training_max;
pub mod workout_id;

pub use cycle::{find_week, week_sets, WorkoutSet, WorkoutWeek, WORKOUT_WEEKS};
pub use plates::{calculate_plate_math, plate_math_label, PlateConfig};
pub use sets::{calculate_set_weight, prescribe, prescribe_workout, PrescribedSet};
pub use training_max::{rounded_training_max, training_max, training_max_for_lift};
pub use workout_id::{parse_workout_id, workout_id, Lift, WorkoutDay, WorkoutId};
