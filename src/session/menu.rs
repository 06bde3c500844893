//! Main menu choices

use crate::ui;
use std::io::{self, Write};

/// One line of input at the main menu, interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    AddHabit,
    ListHabits,
    MarkCompletion,
    /// Listed in the menu, no behavior yet
    ShowProgress,
    /// Listed in the menu, no behavior yet
    DeleteHabit,
    Invalid(String),
}

impl MenuChoice {
    /// Menu entries in display order
    pub const MENU: [MenuChoice; 6] = [
        MenuChoice::AddHabit,
        MenuChoice::ListHabits,
        MenuChoice::MarkCompletion,
        MenuChoice::ShowProgress,
        MenuChoice::DeleteHabit,
        MenuChoice::Exit,
    ];

    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "0" => MenuChoice::Exit,
            "1" => MenuChoice::AddHabit,
            "2" => MenuChoice::ListHabits,
            "3" => MenuChoice::MarkCompletion,
            "4" => MenuChoice::ShowProgress,
            "5" => MenuChoice::DeleteHabit,
            other => MenuChoice::Invalid(other.to_string()),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            MenuChoice::Exit => "0",
            MenuChoice::AddHabit => "1",
            MenuChoice::ListHabits => "2",
            MenuChoice::MarkCompletion => "3",
            MenuChoice::ShowProgress => "4",
            MenuChoice::DeleteHabit => "5",
            MenuChoice::Invalid(raw) => raw,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Exit => "Exit",
            MenuChoice::AddHabit => "Add habit",
            MenuChoice::ListHabits => "Show all habits",
            MenuChoice::MarkCompletion => "Mark completion",
            MenuChoice::ShowProgress => "Show progress",
            MenuChoice::DeleteHabit => "Delete habit",
            MenuChoice::Invalid(_) => "Invalid choice",
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(
            self,
            MenuChoice::ShowProgress | MenuChoice::DeleteHabit | MenuChoice::Invalid(_)
        )
    }
}

/// Render the menu entries followed by a separator rule
pub fn render_menu(out: &mut impl Write) -> io::Result<()> {
    for choice in MenuChoice::MENU.iter() {
        ui::menu_item(out, choice.key(), choice.label(), choice.is_available())?;
    }
    ui::rule(out)
}
