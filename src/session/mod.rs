//! Interactive Session - the menu loop.
//!
//! MainMenu reads one choice, runs one flow, and comes back. A flow that
//! fails on validation or storage is abandoned; the loop reports the error,
//! waits for acknowledgment and shows the menu again. An interrupt or end
//! of input at any prompt ends the session; the store is closed on every way
//! out of `run`.

pub mod input;
pub mod menu;

pub use input::{ChannelInput, Input, LineSource};
pub use menu::MenuChoice;

use crate::clock::Clock;
use crate::habit;
use crate::storage::HabitStore;
use crate::ui::{self, Icons};
use crate::{Error, Result};
use std::io::Write;

enum Step {
    Continue,
    Exit,
}

pub struct Session<S: LineSource, W: Write> {
    store: HabitStore,
    input: S,
    out: W,
    clock: Clock,
    clear_screen: bool,
}

impl<S: LineSource, W: Write> Session<S, W> {
    pub fn new(store: HabitStore, input: S, out: W) -> Self {
        Self {
            store,
            input,
            out,
            clock: Clock::System,
            clear_screen: false,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Clear the terminal before each screen
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    /// Run until the user exits, then release the store.
    ///
    /// Only output failures end the loop with an error; the store is closed
    /// in that case too.
    pub fn run(mut self) -> Result<()> {
        let outcome = self.run_loop();
        let closed = self.store.close();

        match outcome {
            Ok(()) => closed,
            Err(e) => {
                if let Err(close_err) = closed {
                    tracing::warn!("Failed to close store after error: {}", close_err);
                }
                Err(e)
            }
        }
    }

    fn run_loop(&mut self) -> Result<()> {
        loop {
            self.begin_screen("HABIT TRACKER")?;
            menu::render_menu(&mut self.out)?;

            let result = match self.ask("Choose an action (0-5): ") {
                Ok(line) => self.dispatch(MenuChoice::parse(&line)),
                Err(e) => Err(e),
            };

            match self.settle(result)? {
                Step::Continue => {}
                Step::Exit => return Ok(()),
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Step> {
        tracing::debug!("Menu choice: {:?}", choice);

        match choice {
            MenuChoice::Exit => {
                writeln!(self.out)?;
                writeln!(self.out, "{} Goodbye! Your data has been saved.", Icons::WAVE)?;
                return Ok(Step::Exit);
            }
            MenuChoice::AddHabit => self.add_habit()?,
            MenuChoice::ListHabits => self.list_habits()?,
            MenuChoice::MarkCompletion => self.mark_completion()?,
            MenuChoice::ShowProgress | MenuChoice::DeleteHabit => self.unavailable(&choice)?,
            MenuChoice::Invalid(_) => {
                ui::error(&mut self.out, "Invalid choice! Please try again.")?;
                self.pause()?;
            }
        }
        Ok(Step::Continue)
    }

    /// Decide what a finished iteration means for the loop
    fn settle(&mut self, result: Result<Step>) -> Result<Step> {
        match result {
            Ok(step) => Ok(step),
            Err(Error::Interrupted) => {
                writeln!(self.out)?;
                writeln!(self.out)?;
                writeln!(self.out, "{} Session ended.", Icons::WAVE)?;
                Ok(Step::Exit)
            }
            Err(e) if e.is_recoverable() => {
                tracing::warn!("Action failed: {}", e);
                ui::error(&mut self.out, &e.to_string())?;
                let acknowledged = self.pause().map(|_| Step::Continue);
                self.settle(acknowledged)
            }
            Err(e) => Err(e),
        }
    }

    // ========== Flows ==========

    fn add_habit(&mut self) -> Result<()> {
        self.begin_screen("ADD HABIT")?;
        self.try_add_habit()?;
        self.pause()
    }

    fn try_add_habit(&mut self) -> Result<()> {
        let raw = self.ask("Habit name (e.g. 'Exercise'): ")?;
        let name = habit::validate_name(&raw)?;
        let description = self.ask("Description (optional): ")?.trim().to_string();

        let habit = self.store.create_habit_on(&name, &description, self.clock.today())?;
        ui::success(&mut self.out, &format!("Habit '{}' added!", habit.name))?;
        Ok(())
    }

    fn list_habits(&mut self) -> Result<()> {
        self.begin_screen("ALL HABITS")?;
        self.try_list_habits()?;
        self.pause()
    }

    fn try_list_habits(&mut self) -> Result<()> {
        let summaries = self.store.habit_summaries()?;
        if summaries.is_empty() {
            ui::warn(&mut self.out, Icons::EMPTY, "You have no habits yet. Add your first one!")?;
            return Ok(());
        }

        writeln!(self.out, "{} Total habits: {}", Icons::STATS, summaries.len())?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", ui::habit_table(&summaries))?;
        Ok(())
    }

    fn mark_completion(&mut self) -> Result<()> {
        self.begin_screen("MARK COMPLETION")?;
        self.try_mark_completion()?;
        self.pause()
    }

    fn try_mark_completion(&mut self) -> Result<()> {
        let habits = self.store.list_habits()?;
        if habits.is_empty() {
            ui::warn(&mut self.out, Icons::EMPTY, "You have no habits yet. Add your first one!")?;
            return Ok(());
        }

        writeln!(self.out, "Choose a habit to mark:")?;
        writeln!(self.out)?;
        for (i, habit) in habits.iter().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, habit.name)?;
        }
        writeln!(self.out)?;

        let raw = self.ask("Enter habit number: ")?;
        let habit = &habits[habit::parse_selection(&raw, habits.len())?];
        let today = self.clock.today();

        if self.store.has_completion_on(habit.id, today)? {
            let message = format!("'{}' is already marked for today!", habit.name);
            ui::warn(&mut self.out, Icons::THINK, &message)?;
        } else {
            self.store.record_completion(habit.id, today)?;
            ui::success(&mut self.out, &format!("Great! '{}' is done for today!", habit.name))?;
        }
        Ok(())
    }

    fn unavailable(&mut self, choice: &MenuChoice) -> Result<()> {
        let message = format!("'{}' is not available yet.", choice.label());
        ui::warn(&mut self.out, Icons::LOCK, &message)?;
        self.pause()
    }

    // ========== Helpers ==========

    fn begin_screen(&mut self, title: &str) -> Result<()> {
        if self.clear_screen {
            ui::clear_screen();
        }
        ui::header(&mut self.out, title)?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        ui::prompt(&mut self.out, prompt)?;
        match self.input.next_line() {
            Input::Line(line) => Ok(line),
            Input::Interrupted | Input::Closed => Err(Error::Interrupted),
        }
    }

    fn pause(&mut self) -> Result<()> {
        writeln!(self.out)?;
        self.ask("Press Enter to continue...")?;
        Ok(())
    }
}
