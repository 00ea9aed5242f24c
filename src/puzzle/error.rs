//! Puzzle construction errors

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error type for puzzle creation
#[derive(Debug)]
pub enum PuzzleError {
    /// The quote source had no quotes to offer
    QuoteSourceUnavailable,
    /// A quote file could not be read
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QuoteSourceUnavailable => write!(f, "No quotes available to build a puzzle"),
            Self::Io { path, source } => {
                write!(f, "Failed to read quotes from {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::QuoteSourceUnavailable => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}
