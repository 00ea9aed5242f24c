//! Quote sources for new puzzles
//!
//! Provides the embedded quote collection and the sources a puzzle draws its answer from.

mod embedded;
pub mod loader;

pub use embedded::{QUOTES, QUOTES_COUNT};

use crate::puzzle::PuzzleError;
use rand::RngCore;
use rand::seq::IndexedRandom;
use std::path::Path;

/// Supplies the plaintext answer for a new puzzle
pub trait QuoteSource {
    /// Pick one quote
    ///
    /// # Errors
    /// Returns [`PuzzleError::QuoteSourceUnavailable`] if there is nothing to pick from.
    fn choose_quote(&mut self, rng: &mut dyn RngCore) -> Result<String, PuzzleError>;
}

/// Picks a quote uniformly at random from a list
#[derive(Debug, Clone, Default)]
pub struct QuoteList {
    quotes: Vec<String>,
}

impl QuoteList {
    #[must_use]
    pub const fn new(quotes: Vec<String>) -> Self {
        Self { quotes }
    }

    /// The quotes compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::quotes_from_slice(QUOTES))
    }

    /// Load a one-quote-per-line file
    ///
    /// # Errors
    /// Returns [`PuzzleError::Io`] if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PuzzleError> {
        loader::load_from_file(path).map(Self::new)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

impl QuoteSource for QuoteList {
    fn choose_quote(&mut self, rng: &mut dyn RngCore) -> Result<String, PuzzleError> {
        self.quotes
            .choose(rng)
            .cloned()
            .ok_or(PuzzleError::QuoteSourceUnavailable)
    }
}

/// Always offers the same quote
///
/// Each new puzzle still gets a fresh cipher.
#[derive(Debug, Clone)]
pub struct FixedQuote {
    quote: String,
}

impl FixedQuote {
    #[must_use]
    pub fn new(quote: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
        }
    }
}

impl QuoteSource for FixedQuote {
    fn choose_quote(&mut self, _rng: &mut dyn RngCore) -> Result<String, PuzzleError> {
        if self.quote.trim().is_empty() {
            return Err(PuzzleError::QuoteSourceUnavailable);
        }
        Ok(self.quote.clone())
    }
}
