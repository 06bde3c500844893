//! Database schema definitions
//!
//! Table and column names match existing `habits_tracker.db` files.

/// SQL to create the habits table
pub const CREATE_HABITS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS habits (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT,
    created_date DATE NOT NULL
)
"#;

/// SQL to create the completions table
/// No UNIQUE(habit_id, date): one mark per day is checked before insert
pub const CREATE_COMPLETIONS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS completions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    habit_id INTEGER,
    date DATE NOT NULL,
    FOREIGN KEY (habit_id) REFERENCES habits(id)
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_completions_habit_date ON completions(habit_id, date)",
];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_HABITS_TABLE, CREATE_COMPLETIONS_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
