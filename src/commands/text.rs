//! Text mode
//!
//! Line-oriented prompt loop for playing without the TUI

use super::controller::{Controller, Reply};
use crate::output::{
    print_banner, print_early_exit, print_error, print_progress, print_prompt, print_success,
};
use log::info;
use std::io::{self, BufRead, Write};

/// How a text-mode game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The quote was decrypted
    Solved,
    /// The player typed `exit` or input ran out
    Quit,
}

/// Run the text-mode prompt loop until the puzzle is solved or the player leaves
///
/// # Errors
///
/// Returns an error if reading from `input` or writing to `out` fails.
pub fn run_text<R: BufRead, W: Write>(
    controller: &mut Controller,
    input: &mut R,
    out: &mut W,
) -> io::Result<Outcome> {
    print_banner(out)?;

    while !controller.is_game_over() {
        write!(out, "{}", controller.print_cryptogram())?;
        let (guessed, total) = controller.guess_progress();
        print_progress(out, guessed, total)?;
        print_prompt(out)?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            info!("Input closed before the puzzle was solved");
            print_early_exit(out)?;
            return Ok(Outcome::Quit);
        }
        writeln!(out)?;

        match controller.handle_line(&line) {
            Reply::Exit => {
                print_early_exit(out)?;
                return Ok(Outcome::Quit);
            }
            Reply::Invalid(message) => print_error(out, &message)?,
            Reply::Message(message) => writeln!(out, "{message}")?,
            Reply::Silent => {}
        }
        writeln!(out)?;
    }

    write!(out, "{}", controller.print_cryptogram())?;
    print_success(out)?;
    Ok(Outcome::Solved)
}
