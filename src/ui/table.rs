use crate::habit::HabitSummary;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
pub struct HabitRow {
    #[tabled(rename = "#")]
    pub position: usize,
    #[tabled(rename = "Habit")]
    pub name: String,
    #[tabled(rename = "Description")]
    pub description: String,
    #[tabled(rename = "Days done")]
    pub completions: usize,
    #[tabled(rename = "Last done")]
    pub last_done: String,
}

impl From<&HabitSummary> for HabitRow {
    fn from(summary: &HabitSummary) -> Self {
        Self {
            position: summary.position,
            name: summary.habit.name.clone(),
            description: summary.habit.description.clone(),
            completions: summary.completions,
            last_done: summary
                .last_completed
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }
}

/// Render habit summaries; empty string for an empty slice
pub fn habit_table(summaries: &[HabitSummary]) -> String {
    if summaries.is_empty() {
        return String::new();
    }

    let rows: Vec<HabitRow> = summaries.iter().map(HabitRow::from).collect();
    Table::new(&rows).with(Style::rounded()).to_string()
}
