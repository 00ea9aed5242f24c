//! Letter-substitution cipher
//!
//! A `CipherMap` sends every alphabet letter to a different letter, so no
//! letter of a quote is ever left as itself.

use crate::core::{ALPHABET, ALPHABET_LEN, ArrayMap};
use rand::RngCore;
use rand::seq::SliceRandom;

/// Plaintext → ciphertext letter mapping with no fixed points
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherMap {
    forward: ArrayMap<char, char>,
}

impl CipherMap {
    /// Generate a random cipher
    ///
    /// The alphabet is shuffled, then each letter in turn takes the first
    /// unused shuffled letter that differs from itself.
    pub fn generate<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut shuffled = ALPHABET;
        shuffled.shuffle(rng);
        Self::from_shuffled(&shuffled)
    }

    /// Pair the alphabet greedily against a shuffled copy of itself
    ///
    /// `shuffled` must be a permutation of [`ALPHABET`].
    pub(crate) fn from_shuffled(shuffled: &[char; ALPHABET_LEN]) -> Self {
        let mut pool = shuffled.to_vec();
        let mut forward = ArrayMap::with_capacity(ALPHABET_LEN);
        let mut stranded = None;

        for plain in ALPHABET {
            match pool.iter().position(|&c| c != plain) {
                Some(index) => {
                    forward.put(plain, pool.remove(index));
                }
                // Only possible for the last letter, when the pool is just itself
                None => stranded = Some(plain),
            }
        }

        // Trade targets with the first letter; both stay fixed-point free
        if let Some(last) = stranded {
            let first = ALPHABET[0];
            if let Some(target) = forward.put(first, last) {
                forward.put(last, target);
            }
        }

        Self { forward }
    }

    /// Ciphertext letter for an uppercase plaintext letter
    #[must_use]
    pub fn encrypt(&self, plain: char) -> Option<char> {
        self.forward.get(&plain).copied()
    }

    /// Encipher every letter of `text`, leaving other characters untouched
    #[must_use]
    pub fn encrypt_text(&self, text: &str) -> String {
        text.chars()
            .map(|c| self.encrypt(c).unwrap_or(c))
            .collect()
    }

    /// The ciphertext → plaintext mapping that exactly undoes this cipher
    #[must_use]
    pub fn inverse(&self) -> ArrayMap<char, char> {
        self.forward
            .entries()
            .map(|(&plain, &cipher)| (cipher, plain))
            .collect()
    }

    /// `(plain, cipher)` pairs in alphabet order
    pub fn pairs(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.forward.entries().map(|(&plain, &cipher)| (plain, cipher))
    }
}
