//! Writer-based output helpers.
//!
//! Everything the session shows goes through these so tests can capture it.

use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;
use std::io::{self, Write};

pub const RULE_WIDTH: usize = 50;

/// Clear the visible terminal. No-op when stdout is not a terminal.
pub fn clear_screen() {
    let term = console::Term::stdout();
    if term.is_term() {
        term.clear_screen().ok();
    }
}

/// Framed screen title
pub fn header(out: &mut impl Write, title: &str) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "{}", rule.style(theme().rule.clone()))?;
    writeln!(out, " {}", title.style(theme().header.clone()))?;
    writeln!(out, "{}", rule.style(theme().rule.clone()))
}

pub fn rule(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(RULE_WIDTH).style(theme().rule.clone()))
}

pub fn menu_item(out: &mut impl Write, key: &str, label: &str, available: bool) -> io::Result<()> {
    if available {
        writeln!(out, "{}. {}", key.style(theme().key.clone()), label)
    } else {
        writeln!(
            out,
            "{}. {} {}",
            key.style(theme().dim.clone()),
            label.style(theme().dim.clone()),
            "(not available yet)".style(theme().dim.clone())
        )
    }
}

pub fn success(out: &mut impl Write, label: &str) -> io::Result<()> {
    writeln!(out, "{} {}", Icons::CHECK, label.style(theme().success.clone()))
}

pub fn error(out: &mut impl Write, label: &str) -> io::Result<()> {
    writeln!(out, "{} {}", Icons::CROSS, label.style(theme().error.clone()))
}

pub fn warn(out: &mut impl Write, icon: &str, label: &str) -> io::Result<()> {
    writeln!(out, "{} {}", icon, label.style(theme().warn.clone()))
}

/// Print a prompt without a trailing newline and flush it
pub fn prompt(out: &mut impl Write, text: &str) -> io::Result<()> {
    write!(out, "{}", text)?;
    out.flush()
}
