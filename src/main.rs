//! Habitrack CLI - interactive habit tracker

use anyhow::Context;
use clap::Parser;
use habitrack::config;
use habitrack::session::{self, Session};
use habitrack::ui::Icons;
use habitrack::HabitStore;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "habitrack")]
#[command(version)]
#[command(about = "Track daily habits from the terminal")]
#[command(long_about = r#"
Habitrack keeps a list of habits and the days you did them:
  • Add habits with an optional description
  • Mark a habit done once per day
  • See how many days each habit was done and when it was last done

Run without arguments to start the interactive menu.
"#)]
struct Cli {
    /// Path to the database file (default: habits_tracker.db)
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Path to the config file (default: habits.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the menu
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let loaded = config::load_config(cli.config.as_deref()).context("Failed to load config")?;
    let database = config::resolve_database_path(cli.database.as_deref(), loaded.as_ref());
    config::ensure_db_dir(&database)?;

    println!("{} Starting Habit Tracker...", Icons::ROCKET);
    let store = HabitStore::open(&database)
        .with_context(|| format!("Failed to open database {}", database.display()))?;
    tracing::debug!("Using database {}", database.display());

    let input = session::input::stdin_with_interrupt().context("Failed to start input reader")?;
    let clear_screen = console::Term::stdout().is_term();

    // The stdin reader thread is not joined; it may still be blocked on read
    Session::new(store, input, std::io::stdout())
        .with_clear_screen(clear_screen)
        .run()?;

    Ok(())
}
