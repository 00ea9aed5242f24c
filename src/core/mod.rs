//! Core data structures for cryptogram puzzles
//!
//! This module contains the alphabet and the ordered map every puzzle table is built on.
//! Nothing here depends on randomness or I/O.

mod alphabet;
mod array_map;

pub use alphabet::{ALPHABET, ALPHABET_LEN, is_letter, parse_letter};
pub use array_map::{ArrayMap, ArrayMapError, Cursor, DEFAULT_CAPACITY, Iter};
