//! Quote file loading
//!
//! Reads a plain-text collection with one quote per line.

use crate::puzzle::PuzzleError;
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// Load quotes from a file
///
/// Blank lines are skipped and surrounding whitespace is trimmed.
///
/// # Errors
///
/// Returns [`PuzzleError::Io`] if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use cryptograms::quotes::loader::load_from_file;
///
/// let quotes = load_from_file("quotes.txt").unwrap();
/// println!("Loaded {} quotes", quotes.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, PuzzleError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| PuzzleError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let quotes = quotes_from_text(&content);
    if quotes.is_empty() {
        warn!("No quotes found in {}", path.display());
    } else {
        debug!("Loaded {} quotes from {}", quotes.len(), path.display());
    }

    Ok(quotes)
}

/// Split one-quote-per-line text into quotes
#[must_use]
pub fn quotes_from_text(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Convert embedded string slice to owned quotes
#[must_use]
pub fn quotes_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}
