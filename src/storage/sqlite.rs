//! SQLite storage implementation

use std::path::Path;
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, params};
use crate::{Error, Result};
use crate::habit::{Completion, Habit, HabitId, HabitSummary};
use super::schema;

/// SQLite-backed storage for habits and their completions.
///
/// Every statement auto-commits; there are no explicit transactions.
pub struct HabitStore {
    conn: Connection,
}

impl HabitStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize()?;
        tracing::info!("Opened habit store at {}", path.display());
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    /// Ensure both tables exist. Safe to call any number of times.
    pub fn initialize(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// Release the connection
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| Error::Storage(e))?;
        tracing::info!("Closed habit store");
        Ok(())
    }

    // ========== Habit Operations ==========

    /// Insert a habit created today (local date).
    ///
    /// The caller must already have rejected blank names.
    pub fn create_habit(&self, name: &str, description: &str) -> Result<Habit> {
        self.create_habit_on(name, description, Local::now().date_naive())
    }

    /// Insert a habit with an explicit creation date
    pub fn create_habit_on(&self, name: &str, description: &str, created_date: NaiveDate) -> Result<Habit> {
        self.conn.execute(
            "INSERT INTO habits (name, description, created_date) VALUES (?1, ?2, ?3)",
            params![name, description, created_date],
        )?;
        let id = HabitId(self.conn.last_insert_rowid());
        tracing::debug!("Created habit {} ({:?})", id, name);

        Ok(Habit {
            id,
            name: name.to_string(),
            description: description.to_string(),
            created_date,
        })
    }

    /// All habits in insertion order
    pub fn list_habits(&self) -> Result<Vec<Habit>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, description, created_date FROM habits ORDER BY id"
        )?;

        let habits = stmt
            .query_map([], Self::row_to_habit)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(habits)
    }

    /// Helper to convert a row to a Habit
    fn row_to_habit(row: &rusqlite::Row) -> rusqlite::Result<Habit> {
        let description: Option<String> = row.get(2)?;

        Ok(Habit {
            id: HabitId(row.get(0)?),
            name: row.get(1)?,
            description: description.unwrap_or_default(),
            created_date: row.get(3)?,
        })
    }

    // ========== Completion Operations ==========

    /// Number of days the habit was marked done
    pub fn count_completions(&self, habit_id: HabitId) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM completions WHERE habit_id = ?1",
            [habit_id.0],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    /// Latest completion date, or `None` if the habit was never done
    pub fn last_completion_date(&self, habit_id: HabitId) -> Result<Option<NaiveDate>> {
        // ISO-8601 text sorts chronologically, so MAX is the latest day
        let last: Option<NaiveDate> = self.conn.query_row(
            "SELECT MAX(date) FROM completions WHERE habit_id = ?1",
            [habit_id.0],
            |row| row.get(0),
        )?;
        Ok(last)
    }

    /// Whether the habit already has a completion on `date`
    pub fn has_completion_on(&self, habit_id: HabitId, date: NaiveDate) -> Result<bool> {
        let exists: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM completions WHERE habit_id = ?1 AND date = ?2)",
            params![habit_id.0, date],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    /// Append a completion row.
    ///
    /// No duplicate check here: callers consult `has_completion_on` first.
    pub fn record_completion(&self, habit_id: HabitId, date: NaiveDate) -> Result<Completion> {
        self.conn.execute(
            "INSERT INTO completions (habit_id, date) VALUES (?1, ?2)",
            params![habit_id.0, date],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!("Recorded completion {} for habit {} on {}", id, habit_id, date);

        Ok(Completion { id, habit_id, date })
    }

    // ========== Summaries ==========

    /// Every habit with its completion count and last completion date
    pub fn habit_summaries(&self) -> Result<Vec<HabitSummary>> {
        self.list_habits()?
            .into_iter()
            .enumerate()
            .map(|(i, habit)| -> Result<HabitSummary> {
                Ok(HabitSummary {
                    position: i + 1,
                    completions: self.count_completions(habit.id)?,
                    last_completed: self.last_completion_date(habit.id)?,
                    habit,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_create_and_list_habits() {
        let store = HabitStore::open_in_memory().unwrap();

        let before = Local::now().date_naive();
        let created = store.create_habit("Exercise", "").unwrap();
        let after = Local::now().date_naive();
        store.create_habit("Read", "20 pages").unwrap();

        let habits = store.list_habits().unwrap();
        assert_eq!(habits.len(), 2);
        assert_eq!(habits[0], created);
        assert!(habits[0].created_date == before || habits[0].created_date == after);
        assert_eq!(habits[1].name, "Read");
        assert_eq!(habits[1].description, "20 pages");
        assert!(habits[0].id < habits[1].id);
    }

    #[test]
    fn test_list_habits_empty() {
        let store = HabitStore::open_in_memory().unwrap();
        assert!(store.list_habits().unwrap().is_empty());
        assert!(store.habit_summaries().unwrap().is_empty());
    }

    #[test]
    fn test_fresh_habit_has_no_completions() {
        let store = HabitStore::open_in_memory().unwrap();
        let habit = store.create_habit("Meditate", "10 minutes").unwrap();

        assert_eq!(store.count_completions(habit.id).unwrap(), 0);
        assert_eq!(store.last_completion_date(habit.id).unwrap(), None);
    }

    #[test]
    fn test_record_completion() {
        let store = HabitStore::open_in_memory().unwrap();
        let habit = store.create_habit("Exercise", "").unwrap();
        let day = date(2024, 1, 1);

        assert!(!store.has_completion_on(habit.id, day).unwrap());
        let completion = store.record_completion(habit.id, day).unwrap();
        assert_eq!(completion.habit_id, habit.id);
        assert_eq!(completion.date, day);

        assert!(store.has_completion_on(habit.id, day).unwrap());
        assert!(!store.has_completion_on(habit.id, date(2024, 1, 2)).unwrap());
        assert_eq!(store.count_completions(habit.id).unwrap(), 1);
    }

    #[test]
    fn test_last_completion_is_latest_date() {
        let store = HabitStore::open_in_memory().unwrap();
        let habit = store.create_habit("Exercise", "").unwrap();

        store.record_completion(habit.id, date(2024, 1, 3)).unwrap();
        store.record_completion(habit.id, date(2024, 1, 1)).unwrap();

        assert_eq!(store.last_completion_date(habit.id).unwrap(), Some(date(2024, 1, 3)));
        assert_eq!(store.count_completions(habit.id).unwrap(), 2);
    }

    #[test]
    fn test_completions_are_per_habit() {
        let store = HabitStore::open_in_memory().unwrap();
        let a = store.create_habit("A", "").unwrap();
        let b = store.create_habit("B", "").unwrap();

        store.record_completion(a.id, date(2024, 5, 1)).unwrap();

        let summaries = store.habit_summaries().unwrap();
        assert_eq!(summaries[0].position, 1);
        assert_eq!(summaries[0].completions, 1);
        assert_eq!(summaries[0].last_completed, Some(date(2024, 5, 1)));
        assert_eq!(summaries[1].position, 2);
        assert_eq!(summaries[1].habit, b);
        assert_eq!(summaries[1].completions, 0);
        assert_eq!(summaries[1].last_completed, None);
    }

    #[test]
    fn test_reopen_file_keeps_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("habits_tracker.db");

        let store = HabitStore::open(&path).unwrap();
        let habit = store.create_habit_on("Exercise", "", date(2024, 1, 1)).unwrap();
        store.record_completion(habit.id, date(2024, 1, 2)).unwrap();
        store.close().unwrap();

        let store = HabitStore::open(&path).unwrap();
        store.initialize().unwrap();
        let habits = store.list_habits().unwrap();
        assert_eq!(habits, vec![habit.clone()]);
        assert_eq!(store.last_completion_date(habit.id).unwrap(), Some(date(2024, 1, 2)));
    }

    #[test]
    fn test_null_description_reads_as_empty() {
        let store = HabitStore::open_in_memory().unwrap();
        store
            .conn
            .execute(
                "INSERT INTO habits (name, description, created_date) VALUES ('Legacy', NULL, '2023-12-31')",
                [],
            )
            .unwrap();

        let habits = store.list_habits().unwrap();
        assert_eq!(habits[0].description, "");
        assert_eq!(habits[0].created_date, date(2023, 12, 31));
    }
}
