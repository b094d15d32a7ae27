//! fivethreeone - Personal 5/3/1 strength training tracker

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use fivethreeone::db::{Database, MAXES_KEY};
use fivethreeone::exercises::{all_tags, exercises_by_primary_archetype, exercises_by_tag};
use fivethreeone::plan::numeric::parse_weight_input;
use fivethreeone::plan::plates::{DEFAULT_BAR_WEIGHT, DEFAULT_PLATES};
use fivethreeone::plan::{
    Lift, PlateConfig, WORKOUT_WEEKS, WorkoutDay, WorkoutId, parse_workout_id, plate_math_label,
    prescribe, prescribe_workout, rounded_training_max,
};
use fivethreeone::tui::App;

#[derive(Parser)]
#[command(name = "fivethreeone")]
#[command(author, version, about = "5/3/1 strength training tracker")]
struct Cli {
    /// SQLite database file
    #[arg(long, global = true, env = "FIVETHREEONE_DB", default_value = "fivethreeone.db")]
    db: String,

    /// Bar weight in lbs for plate math
    #[arg(long, global = true, default_value_t = DEFAULT_BAR_WEIGHT)]
    bar: f64,

    /// Available plate sizes for plate math, comma separated
    #[arg(long, global = true, value_delimiter = ',')]
    plates: Option<Vec<f64>>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open TUI dashboard
    Tui,

    /// Show training maxes
    Maxes,

    /// Set the training max of a lift
    SetMax {
        /// squat, bench or deadlift
        lift: Lift,
        /// Training max in lbs (non-digits are ignored)
        weight: String,
    },

    /// Set the added weight for weighted pull-ups
    SetPullups {
        weight: String,
    },

    /// Set a training max to 90% of a one-rep max
    #[command(name = "from-1rm")]
    FromOneRepMax {
        lift: Lift,
        one_rep_max: String,
    },

    /// Show the cycle with prescribed weights
    Plan {
        /// Only this week (1-4)
        #[arg(short, long)]
        week: Option<u8>,
    },

    /// Show one workout with plate math (e.g. "3-bench")
    Workout {
        id: String,
    },

    /// Mark a workout as completed
    Done {
        id: String,
    },

    /// Mark a workout as not completed
    Undo {
        id: String,
    },

    /// Clear all workout completions
    Reset,

    /// List exercises by archetype, or those with a tag
    Exercises {
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// List all exercise tags
    Tags,

    /// Plates per side for a total bar weight
    Plates {
        weight: f64,
    },
}

fn print_workout(db: &Database, id: &WorkoutId, plates: &PlateConfig) -> Result<()> {
    let maxes = db.load_maxes()?;
    let completed = db.load_completed()?;

    println!("{}", id.title());
    match id.day.lift() {
        Some(lift) => println!("Training Max: {} lbs", maxes.get(lift)),
        None => println!("Added weight: {} lbs", maxes.weighted_pullup_weight),
    }
    println!("{:-<40}", "");

    for set in prescribe_workout(id, &maxes) {
        let amrap = if set.amrap { " (AMRAP)" } else { "" };
        println!("{:>4} lbs  {} reps{}", set.weight, set.reps, amrap);
        if id.day.lift().is_some() {
            println!("          {}", plate_math_label(f64::from(set.weight), plates));
        }
    }

    println!();
    if completed.contains(&id.to_string()) {
        println!("Session Completed");
    } else {
        println!("Not completed (mark with: done {})", id);
    }
    Ok(())
}

fn mark(db: &Database, raw_id: &str, complete: bool) -> Result<()> {
    let Some(id) = parse_workout_id(raw_id) else {
        println!("Workout not found.");
        return Ok(());
    };
    let completed = db.load_completed()?.toggled(&id.to_string(), complete);
    db.save_completed(&completed)?;
    info!("{} {}", if complete { "Completed" } else { "Reopened" }, id);
    println!("{}: {}", id.title(), if complete { "completed" } else { "not completed" });
    Ok(())
}

/// Log file next to the database, used while the TUI owns the terminal
fn tui_log_path(db: &str) -> PathBuf {
    Path::new(db).with_extension("log")
}

fn opens_tui(command: Option<&Commands>) -> bool {
    matches!(command, None | Some(Commands::Tui))
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let builder = tracing_subscriber::fmt();
    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // stderr would draw over the alternate screen
    let log_file = opens_tui(cli.command.as_ref()).then(|| tui_log_path(&cli.db));
    init_logging(log_file.as_deref())?;
    let db = Database::open(&cli.db)?;
    let plates = PlateConfig::new(cli.bar, cli.plates.as_deref().unwrap_or(DEFAULT_PLATES));

    match cli.command {
        Some(Commands::Tui) | None => {
            let mut app = App::new(db)?.with_plates(plates);
            app.run()?;
        }

        Some(Commands::Maxes) => {
            let maxes = db.load_maxes()?;
            println!("Training Maxes");
            println!("{:-<40}", "");
            for lift in Lift::all() {
                println!("{:20} {:>6} lbs", lift.label(), maxes.get(*lift));
            }
            println!("{:20} {:>6} lbs", "Weighted Pull-Ups", maxes.weighted_pullup_weight);
            if let Some(at) = db.updated_at(MAXES_KEY)? {
                println!("\nLast saved: {}", at.format("%Y-%m-%d %H:%M"));
            }
        }

        Some(Commands::SetMax { lift, weight }) => {
            let value = parse_weight_input(&weight);
            let maxes = db.load_maxes()?.with(lift, value);
            db.save_maxes(&maxes)?;
            info!("Set {} training max to {}", lift, value);
            println!("{} Training Max: {} lbs", lift.label(), value);
        }

        Some(Commands::SetPullups { weight }) => {
            let value = parse_weight_input(&weight);
            let maxes = db.load_maxes()?.with_pullup_weight(value);
            db.save_maxes(&maxes)?;
            info!("Set weighted pull-up weight to {}", value);
            println!("Weighted Pull-Ups: {} lbs", value);
        }

        Some(Commands::FromOneRepMax { lift, one_rep_max }) => {
            let one_rep_max = parse_weight_input(&one_rep_max);
            if one_rep_max == 0 {
                println!("Enter a one-rep max above 0");
                return Ok(());
            }
            let tm = rounded_training_max(f64::from(one_rep_max));
            let maxes = db.load_maxes()?.with(lift, tm);
            db.save_maxes(&maxes)?;
            info!("Set {} training max to {} from 1RM {}", lift, tm, one_rep_max);
            println!("{} 1RM {} lbs -> Training Max {} lbs", lift.label(), one_rep_max, tm);
        }

        Some(Commands::Plan { week }) => {
            let maxes = db.load_maxes()?;
            let completed = db.load_completed()?;

            for workout_week in WORKOUT_WEEKS.iter().filter(|w| week.is_none_or(|n| n == w.week)) {
                println!("Week {} • {}", workout_week.week, workout_week.scheme_label());
                println!("{:-<60}", "");
                for day in WorkoutDay::all() {
                    let id = WorkoutId::new(workout_week.week, *day);
                    let mark = if completed.contains(&id.to_string()) { "[x]" } else { "[ ]" };
                    let sets: Vec<String> = prescribe(workout_week.week, *day, &maxes)
                        .iter()
                        .map(|s| s.describe())
                        .collect();
                    println!("{} {:18} {}", mark, day.label(), sets.join(", "));
                }
                println!();
            }
        }

        Some(Commands::Workout { id }) => match parse_workout_id(&id) {
            Some(id) => print_workout(&db, &id, &plates)?,
            None => println!("Workout not found."),
        },

        Some(Commands::Done { id }) => mark(&db, &id, true)?,

        Some(Commands::Undo { id }) => mark(&db, &id, false)?,

        Some(Commands::Reset) => {
            db.clear_completed()?;
            info!("Cycle reset");
            println!("Cycle reset");
        }

        Some(Commands::Exercises { tag }) => match tag {
            Some(tag) => {
                let exercises = exercises_by_tag(&tag);
                if exercises.is_empty() {
                    println!("No exercises found for this category.");
                }
                for exercise in exercises {
                    println!("• {}", exercise.name);
                }
            }
            None => {
                for (archetype, exercises) in exercises_by_primary_archetype() {
                    println!("{}", archetype.label());
                    for exercise in exercises {
                        println!("  {:32} {}", exercise.name, exercise.tags.join(", "));
                    }
                    println!();
                }
            }
        },

        Some(Commands::Tags) => {
            for tag in all_tags() {
                println!("{}", tag);
            }
        }

        Some(Commands::Plates { weight }) => {
            println!("{} lbs: {}", weight, plate_math_label(weight, &plates));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_log_path() {
        assert_eq!(tui_log_path("fivethreeone.db"), PathBuf::from("fivethreeone.log"));
        assert_eq!(tui_log_path("data/train.sqlite"), PathBuf::from("data/train.log"));
        assert_eq!(tui_log_path("lifts"), PathBuf::from("lifts.log"));
    }

    #[test]
    fn test_only_tui_logs_to_file() {
        assert!(opens_tui(Cli::parse_from(["fivethreeone"]).command.as_ref()));
        assert!(opens_tui(Cli::parse_from(["fivethreeone", "tui"]).command.as_ref()));
        assert!(!opens_tui(Cli::parse_from(["fivethreeone", "plates", "135"]).command.as_ref()));
        assert!(!opens_tui(Cli::parse_from(["fivethreeone", "done", "1-squat"]).command.as_ref()));
    }
}
