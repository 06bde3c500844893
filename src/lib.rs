//! # Habitrack - Local-first habit tracker
//!
//! A single-user terminal habit tracker.
//!
//! Habitrack provides:
//! - Habit registration with an optional description
//! - One completion mark per habit per calendar day
//! - A summary of completion counts and most-recent completion dates
//! - SQLite-backed storage (`habits` + `completions` tables)
//! - An interactive menu session driving all of the above

pub mod habit;
pub mod clock;
pub mod storage;
pub mod session;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use habit::{Completion, Habit, HabitId, HabitSummary, ValidationError};
pub use clock::Clock;
pub use storage::HabitStore;
pub use session::Session;

/// Result type alias for Habitrack operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Habitrack operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The user asked to leave (Ctrl-C or end of input).
    #[error("Interrupted")]
    Interrupted,
}

impl Error {
    /// Errors the session reports and recovers from without ending the loop
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Storage(_) | Error::Validation(_))
    }
}
