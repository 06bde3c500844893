//! Habit types
//!
//! Two entities are persisted:
//! - `Habit`: something the user wants to do every day
//! - `Completion`: one day on which a habit was done
//!
//! `HabitSummary` is the read model shown in the habit listing.

use chrono::NaiveDate;
use std::num::IntErrorKind;

/// Store-assigned habit identifier. Stable for the habit's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HabitId(pub i64);

impl std::fmt::Display for HabitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered habit. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Habit {
    /// Row id, monotonic and never reused
    pub id: HabitId,
    /// Non-empty, trimmed name
    pub name: String,
    /// Free text; empty when the user skipped it
    pub description: String,
    /// Local calendar date the habit was added
    pub created_date: NaiveDate,
}

/// A single day on which a habit was marked done
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub id: i64,
    pub habit_id: HabitId,
    pub date: NaiveDate,
}

/// A habit together with its completion statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitSummary {
    /// 1-based position in the listing
    pub position: usize,
    pub habit: Habit,
    /// Number of days the habit was marked done
    pub completions: usize,
    /// Most recent completion date, if any
    pub last_completed: Option<NaiveDate>,
}

/// Rejected user input. The current flow is abandoned, never re-prompted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Habit name cannot be empty")]
    EmptyName,

    #[error("Please enter a number (got '{0}')")]
    NotANumber(String),

    #[error("Invalid habit number {choice}: choose between 1 and {max}")]
    OutOfRange { choice: String, max: usize },
}

/// Trim a habit name and reject it if nothing is left
pub fn validate_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(name.to_string())
}

/// Parse a 1-based selection against a list of `count` entries.
///
/// Returns the zero-based index into that list.
pub fn parse_selection(raw: &str, count: usize) -> Result<usize, ValidationError> {
    let trimmed = raw.trim();
    let out_of_range = || ValidationError::OutOfRange {
        choice: trimmed.to_string(),
        max: count,
    };

    // Integers too wide for i64 are still numbers, just not in the list
    let choice: i64 = trimmed.parse().map_err(|e: std::num::ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => out_of_range(),
        _ => ValidationError::NotANumber(trimmed.to_string()),
    })?;

    if choice < 1 || choice as u64 > count as u64 {
        return Err(out_of_range());
    }
    Ok(choice as usize - 1)
}
