//! Puzzle generation and state
//!
//! Builds a cipher for a quote and tracks the player's guesses against it.

mod cipher;
mod error;
mod model;

pub use cipher::CipherMap;
pub use error::PuzzleError;
pub use model::{CryptogramModel, Hint, PuzzleObserver, UNKNOWN};
