//! Game controller
//!
//! Sits between a view and the puzzle model: validates guesses, runs
//! commands and formats puzzle state for display.

use super::protocol::Command;
use crate::core::is_letter;
use crate::output::{HELP_TEXT, LINE_WIDTH, frequency_report, word_wrap};
use crate::puzzle::{CryptogramModel, UNKNOWN};
use log::debug;

/// Message returned for input that is not a command
pub const INVALID_COMMAND: &str = "Enter valid command!";

/// Result of running one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to show the player
    Message(String),
    /// The command succeeded and has nothing to say
    Silent,
    /// The player asked to leave
    Exit,
    /// The input was not a command; carries the message to show
    Invalid(String),
}

/// Controller for one puzzle
#[derive(Debug)]
pub struct Controller {
    model: CryptogramModel,
}

impl Controller {
    #[must_use]
    pub const fn new(model: CryptogramModel) -> Self {
        Self { model }
    }

    /// Controller for a known answer with a random cipher
    #[must_use]
    pub fn from_answer(answer: &str) -> Self {
        Self::new(CryptogramModel::from_answer(answer))
    }

    #[must_use]
    pub const fn model(&self) -> &CryptogramModel {
        &self.model
    }

    pub const fn model_mut(&mut self) -> &mut CryptogramModel {
        &mut self.model
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.model.is_complete()
    }

    /// Guess that `cipher` stands for `plain`; non-letters are ignored
    pub fn make_replacement(&mut self, cipher: char, plain: char) {
        self.model.submit_guess(cipher, plain);
    }

    /// Parse and run one line of input
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let command = Command::parse(line);
        debug!("Command {line:?} parsed as {command:?}");
        self.execute(command)
    }

    /// Run a parsed command
    pub fn execute(&mut self, command: Command) -> Reply {
        match command {
            Command::Replace { cipher, plain } => {
                self.make_replacement(cipher, plain);
                Reply::Silent
            }
            Command::Freq => Reply::Message(self.frequency_report()),
            Command::Hint => Reply::Message(self.hint_message()),
            Command::Help => Reply::Message(Self::help_text().to_string()),
            Command::Exit => Reply::Exit,
            Command::Invalid => Reply::Invalid(INVALID_COMMAND.to_string()),
        }
    }

    /// `Hint: X = Y` for the next hint, without applying it
    #[must_use]
    pub fn hint_message(&self) -> String {
        self.model.next_hint().map_or_else(
            || "No hints left, the quote is solved!".to_string(),
            |hint| format!("Hint: {hint}"),
        )
    }

    /// Command reference shown by `help`
    #[must_use]
    pub const fn help_text() -> &'static str {
        HELP_TEXT
    }

    #[must_use]
    pub fn frequency_report(&self) -> String {
        frequency_report(self.model.letter_frequency())
    }

    /// The encrypted quote wrapped to the text view's width
    #[must_use]
    pub fn encrypted_lines(&self) -> Vec<String> {
        word_wrap(self.model.encrypted_text(), LINE_WIDTH)
    }

    /// The player's decryption wrapped to the text view's width
    ///
    /// Unguessed letters show as blanks.
    #[must_use]
    pub fn progress_lines(&self) -> Vec<String> {
        self.progress_lines_with(' ', LINE_WIDTH)
    }

    /// The player's decryption wrapped to `width`, unknown letters shown as `blank`
    ///
    /// The decrypted text is wrapped before blanking, so every line breaks
    /// where the matching encrypted line does.
    #[must_use]
    pub fn progress_lines_with(&self, blank: char, width: usize) -> Vec<String> {
        let decrypted = word_wrap(self.model.decrypted_text(), width);
        let encrypted = word_wrap(self.model.encrypted_text(), width);
        decrypted
            .iter()
            .zip(&encrypted)
            .map(|(shown, cipher)| blank_unknown(shown, cipher, blank))
            .collect()
    }

    /// The decrypted text with unknown letters blanked out
    #[must_use]
    pub fn progress_text(&self) -> String {
        self.progress_with(' ')
    }

    /// The decrypted text with unknown letters shown as `blank`
    #[must_use]
    pub fn progress_with(&self, blank: char) -> String {
        blank_unknown(
            self.model.decrypted_text(),
            self.model.encrypted_text(),
            blank,
        )
    }

    /// Progress lines interleaved with the encrypted lines they decode
    #[must_use]
    pub fn print_cryptogram(&self) -> String {
        let mut display = String::new();
        for (progress, encrypted) in self.progress_lines().iter().zip(self.encrypted_lines()) {
            display.push_str(progress);
            display.push('\n');
            display.push_str(&encrypted);
            display.push('\n');
        }
        display
    }

    /// Distinct cipher letters in the quote and how many have a guess
    #[must_use]
    pub fn guess_progress(&self) -> (usize, usize) {
        let frequency = self.model.letter_frequency();
        let present: Vec<char> = frequency
            .entries()
            .filter(|&(_, &count)| count > 0)
            .map(|(&letter, _)| letter)
            .collect();
        let guessed = present
            .iter()
            .filter(|&letter| self.model.guesses().contains_key(letter))
            .count();
        (guessed, present.len())
    }
}

/// Replace `UNKNOWN` with `blank` wherever `cipher` has a letter
fn blank_unknown(shown: &str, cipher: &str, blank: char) -> String {
    shown
        .chars()
        .zip(cipher.chars())
        .map(|(shown, cipher)| {
            if is_letter(cipher) && shown == UNKNOWN {
                blank
            } else {
                shown
            }
        })
        .collect()
}
