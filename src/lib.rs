//! fivethreeone - Personal 5/3/1 strength training tracker
//!
//! Training maxes in, prescribed sets and plate math out.

pub mod db;
pub mod exercises;
pub mod plan;
pub mod state;
pub mod tui;

pub use db::Database;
pub use state::{CompletedWorkouts, Maxes};
