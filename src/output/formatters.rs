//! Formatting utilities for terminal output

use crate::core::ArrayMap;

/// Column limit for the text view
pub const LINE_WIDTH: usize = 80;

/// Letters per line in a frequency report
const FREQUENCY_PER_LINE: usize = 7;

/// Command reference shown by `help`
pub const HELP_TEXT: &str = "\
|---------------------------------------------------------------------------|
|Commands:        Description:                                              |
|---------------------------------------------------------------------------|
|replace X by Y – replace letter X by letter Y in our attempted solution.   |
|X = Y          – replace letter X by letter Y in our attempted solution.   |
|freq           – Display the letter frequencies in the encrypted quotation.|
|hint           – display one correct mapping that has not yet been guessed.|
|exit           – Ends the game early.                                      |
|---------------------------------------------------------------------------|";

/// Wrap text at word boundaries
///
/// Words are separated by single spaces and each word keeps a trailing
/// space. A word that would bring the line to `width` columns or more starts
/// a new line. Two texts with the same word lengths wrap identically, so a
/// decryption wrapped with its `?` placeholders still in place lines up under
/// its ciphertext. Blanking the placeholders first would move the breaks.
///
/// # Examples
/// ```
/// use cryptograms::output::formatters::word_wrap;
///
/// assert_eq!(word_wrap("AB CD EF", 6), vec!["AB ", "CD ", "EF "]);
/// assert_eq!(word_wrap("A . ", 80), vec!["A . "]);
/// ```
#[must_use]
pub fn word_wrap(text: &str, width: usize) -> Vec<String> {
    let mut words: Vec<&str> = text.split(' ').collect();
    while words.last() == Some(&"") {
        words.pop();
    }

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in words {
        let size = word.chars().count() + 1;
        if line_len + size >= width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        line.push_str(word);
        line.push(' ');
        line_len += size;
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Format letter counts as `A: n ` entries, seven to a line
#[must_use]
pub fn frequency_report(frequency: &ArrayMap<char, usize>) -> String {
    let mut report = String::new();

    for (i, (letter, count)) in frequency.entries().enumerate() {
        report.push_str(&format!("{letter}: {count} "));
        if (i + 1) % FREQUENCY_PER_LINE == 0 {
            report.push('\n');
        }
    }

    report
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        width
    } else {
        (value * width / max).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
