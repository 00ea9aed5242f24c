//! Display functions for the text view

use super::formatters::create_progress_bar;
use colored::Colorize;
use std::io::{self, Write};

/// Print the welcome banner
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                        Cryptograms                           ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Each letter of the quote below stands for a different letter.")?;
    writeln!(out, "Work out the substitution to reveal the quote.\n")
}

/// Print the command prompt block
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    let rule = "-".repeat(44);
    writeln!(out, "{}", rule.bright_black())?;
    writeln!(out, "Enter a command (type help to see commands):")?;
    writeln!(out, "{}", rule.bright_black())?;
    out.flush()
}

/// Print how many of the puzzle's cipher letters have a guess
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_progress<W: Write>(out: &mut W, guessed: usize, total: usize) -> io::Result<()> {
    writeln!(
        out,
        "Guessed: [{}] {guessed}/{total} letters",
        create_progress_bar(guessed, total, 20).cyan()
    )
}

/// Print an error message for the player
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_error<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message.red())
}

/// Print the final message after the quote is solved
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_success<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "═".repeat(44).bright_cyan())?;
    writeln!(out, "{}", "You got it!".bright_green().bold())?;
    writeln!(out, "{}", "═".repeat(44).bright_cyan())
}

/// Print the message for leaving before the quote is solved
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_early_exit<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "Game Ended Early!".yellow().bold())
}
