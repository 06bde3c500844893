//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with tables:
//! - habits(id, name, description, created_date)
//! - completions(id, habit_id, date)

pub mod schema;
pub mod sqlite;

pub use sqlite::HabitStore;
