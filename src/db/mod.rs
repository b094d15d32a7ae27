//! Database module - SQLite key-value storage for tracker state

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, params};
use serde_json::Value;
use tracing::{debug, warn};

use crate::state::{CompletedWorkouts, Maxes};

/// Key holding the maxes JSON object
pub const MAXES_KEY: &str = "@user_maxes";
/// Key holding the JSON array of completed workout ids
pub const COMPLETED_KEY: &str = "@completed_workouts";

/// Database wrapper
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("failed to open database at {}", path))?;
        let db = Self { conn };
        db.init_schema()?;
        debug!("Opened database {}", path);
        Ok(db)
    }

    /// Initialize database schema
    fn init_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    /// Raw value for a key
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    /// Store a value, replacing any previous one
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        self.conn.execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }

    /// When a key was last written
    pub fn updated_at(&self, key: &str) -> Result<Option<DateTime<Utc>>> {
        let stamp: Option<String> = self
            .conn
            .query_row("SELECT updated_at FROM kv WHERE key = ?1", params![key], |row| row.get(0))
            .optional()?;

        Ok(stamp.and_then(|s| {
            DateTime::parse_from_rfc3339(&s)
                .map(|d| d.with_timezone(&Utc))
                .ok()
        }))
    }

    /// Parse a stored JSON value; malformed data reads as absent
    fn get_json(&self, key: &str) -> Result<Option<Value>> {
        let Some(raw) = self.get(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!("Ignoring malformed value for {}: {}", key, e);
                Ok(None)
            }
        }
    }

    /// Stored maxes, or all zeros when missing or malformed
    pub fn load_maxes(&self) -> Result<Maxes> {
        Ok(self
            .get_json(MAXES_KEY)?
            .map(|v| Maxes::normalize(&v))
            .unwrap_or_default())
    }

    pub fn save_maxes(&self, maxes: &Maxes) -> Result<()> {
        self.set(MAXES_KEY, &serde_json::to_string(maxes)?)?;
        debug!("Saved maxes {:?}", maxes);
        Ok(())
    }

    /// Completed workout ids, or none when missing or malformed
    pub fn load_completed(&self) -> Result<CompletedWorkouts> {
        Ok(self
            .get_json(COMPLETED_KEY)?
            .map(|v| CompletedWorkouts::normalize(&v))
            .unwrap_or_default())
    }

    pub fn save_completed(&self, completed: &CompletedWorkouts) -> Result<()> {
        self.set(COMPLETED_KEY, &serde_json::to_string(completed)?)?;
        debug!("Saved {} completed workouts", completed.len());
        Ok(())
    }

    /// Forget all completions (start a new cycle)
    pub fn clear_completed(&self) -> Result<()> {
        self.remove(COMPLETED_KEY)?;
        debug!("Cleared completed workouts");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::Lift;

    fn memory_db() -> Database {
        Database::open(":memory:").unwrap()
    }

    #[test]
    fn test_get_missing_key() {
        let db = memory_db();
        assert_eq!(db.get("nope").unwrap(), None);
        assert_eq!(db.updated_at("nope").unwrap(), None);
    }

    #[test]
    fn test_set_get_last_write_wins() {
        let db = memory_db();
        db.set("k", "one").unwrap();
        db.set("k", "two").unwrap();
        assert_eq!(db.get("k").unwrap().as_deref(), Some("two"));
        assert!(db.updated_at("k").unwrap().is_some());
    }

    #[test]
    fn test_remove() {
        let db = memory_db();
        db.set("k", "v").unwrap();
        db.remove("k").unwrap();
        assert_eq!(db.get("k").unwrap(), None);
    }

    #[test]
    fn test_load_maxes_defaults() {
        let db = memory_db();
        assert_eq!(db.load_maxes().unwrap(), Maxes::default());
    }

    #[test]
    fn test_save_and_load_maxes() {
        let db = memory_db();
        let maxes = Maxes::default().with(Lift::Squat, 315).with_pullup_weight(25);
        db.save_maxes(&maxes).unwrap();
        assert_eq!(db.load_maxes().unwrap(), maxes);
    }

    #[test]
    fn test_load_maxes_malformed_json() {
        let db = memory_db();
        db.set(MAXES_KEY, "{not json").unwrap();
        assert_eq!(db.load_maxes().unwrap(), Maxes::default());
    }

    #[test]
    fn test_load_maxes_partial_object() {
        let db = memory_db();
        db.set(MAXES_KEY, r#"{"bench": "185", "squat": "x"}"#).unwrap();
        let maxes = db.load_maxes().unwrap();
        assert_eq!(maxes.bench, 185);
        assert_eq!(maxes.squat, 0);
    }

    #[test]
    fn test_completed_round_trip_and_clear() {
        let db = memory_db();
        let done = CompletedWorkouts::new()
            .with_completed("1-squat")
            .with_completed("1-weighted-pullups");
        db.save_completed(&done).unwrap();
        assert_eq!(db.load_completed().unwrap(), done);

        db.clear_completed().unwrap();
        assert!(db.load_completed().unwrap().is_empty());
    }

    #[test]
    fn test_load_completed_dedupes_stored_list() {
        let db = memory_db();
        db.set(COMPLETED_KEY, r#"["2-bench", "2-bench", 3, "3-squat"]"#).unwrap();
        let done = db.load_completed().unwrap();
        assert_eq!(done.iter().collect::<Vec<_>>(), vec!["2-bench", "3-squat"]);
    }

    #[test]
    fn test_load_completed_not_an_array() {
        let db = memory_db();
        db.set(COMPLETED_KEY, r#""1-squat""#).unwrap();
        assert!(db.load_completed().unwrap().is_empty());
    }
}
