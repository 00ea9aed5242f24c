//! Puzzle state
//!
//! `CryptogramModel` owns one puzzle: the answer, its cipher, the player's
//! guesses and the texts derived from them.

use super::cipher::CipherMap;
use super::error::PuzzleError;
use crate::core::{ALPHABET, ALPHABET_LEN, ArrayMap, is_letter};
use crate::quotes::QuoteSource;
use log::{debug, info, trace};
use rand::RngCore;
use std::fmt;

/// Placeholder shown for letters the player has not guessed yet
pub const UNKNOWN: char = '?';

/// Receives a notification after every change to a puzzle
///
/// Observers are called synchronously, after the new state is in place.
/// Closures taking `&CryptogramModel` implement this trait.
pub trait PuzzleObserver {
    fn on_puzzle_changed(&mut self, model: &CryptogramModel);
}

impl<F: FnMut(&CryptogramModel)> PuzzleObserver for F {
    fn on_puzzle_changed(&mut self, model: &CryptogramModel) {
        self(model);
    }
}

/// One correct mapping the player has not made yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    /// Letter as it appears in the encrypted quote
    pub cipher: char,
    /// Letter it stands for in the answer
    pub plain: char,
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.cipher, self.plain)
    }
}

/// A cryptogram puzzle and the player's progress on it
pub struct CryptogramModel {
    answer: String,
    cipher: CipherMap,
    guesses: ArrayMap<char, char>,
    encrypted: String,
    decrypted: String,
    frequency: ArrayMap<char, usize>,
    observers: Vec<Box<dyn PuzzleObserver>>,
}

impl CryptogramModel {
    /// Create a puzzle from a quote chosen by `source`
    ///
    /// # Errors
    /// Returns [`PuzzleError::QuoteSourceUnavailable`] if the source has no quotes.
    pub fn new<R: RngCore>(source: &mut dyn QuoteSource, rng: &mut R) -> Result<Self, PuzzleError> {
        let quote = source.choose_quote(&mut *rng)?;
        Ok(Self::with_answer(&quote, rng))
    }

    /// Create a puzzle for a known answer, using `rng` for the cipher
    ///
    /// # Examples
    /// ```
    /// use cryptograms::puzzle::CryptogramModel;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut model = CryptogramModel::with_answer("Fun", &mut StdRng::seed_from_u64(1));
    /// assert_eq!(model.answer(), "FUN");
    /// assert_eq!(model.decrypted_text(), "???");
    ///
    /// while let Some(hint) = model.next_hint() {
    ///     model.submit_guess(hint.cipher, hint.plain);
    /// }
    /// assert!(model.is_complete());
    /// ```
    pub fn with_answer<R: RngCore + ?Sized>(answer: &str, rng: &mut R) -> Self {
        let answer = answer.to_uppercase();
        let cipher = CipherMap::generate(rng);
        let encrypted = cipher.encrypt_text(&answer);
        let frequency = count_letters(&encrypted);

        debug!("New puzzle: {} letters, encrypted as {encrypted:?}", answer.len());

        let mut model = Self {
            answer,
            cipher,
            guesses: ArrayMap::new(),
            encrypted,
            decrypted: String::new(),
            frequency,
            observers: Vec::new(),
        };
        model.decrypted = model.decrypt();
        model
    }

    /// Create a puzzle for a known answer with a thread-local random cipher
    #[must_use]
    pub fn from_answer(answer: &str) -> Self {
        Self::with_answer(answer, &mut rand::rng())
    }

    /// Register an observer for state changes
    pub fn subscribe(&mut self, observer: impl PuzzleObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Guess that `cipher` stands for `plain`
    ///
    /// Both letters are uppercased. If either is not an alphabet letter the
    /// guess is ignored and nothing changes. A new guess for the same cipher
    /// letter replaces the old one.
    pub fn submit_guess(&mut self, cipher: char, plain: char) {
        if !is_letter(cipher) || !is_letter(plain) {
            trace!("Ignoring guess {cipher:?} -> {plain:?}");
            return;
        }

        let cipher = cipher.to_ascii_uppercase();
        let plain = plain.to_ascii_uppercase();
        let previous = self.guesses.put(cipher, plain);
        trace!("Guess {cipher} = {plain} (was {previous:?})");

        self.decrypted = self.decrypt();
        if self.is_complete() {
            info!("Puzzle solved with {} mappings", self.guesses.len());
        }

        self.notify_observers();
    }

    /// Apply the next hint as a guess
    ///
    /// Returns the hint that was applied, or `None` if the puzzle is already solved.
    pub fn apply_hint(&mut self) -> Option<Hint> {
        let hint = self.next_hint()?;
        self.submit_guess(hint.cipher, hint.plain);
        Some(hint)
    }

    /// Whether the player's decryption matches the answer exactly
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.decrypted == self.answer
    }

    /// The uppercased quote being solved
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn encrypted_text(&self) -> &str {
        &self.encrypted
    }

    /// The encrypted text with the player's guesses applied
    ///
    /// Unguessed letters appear as [`UNKNOWN`].
    #[must_use]
    pub fn decrypted_text(&self) -> &str {
        &self.decrypted
    }

    /// Ciphertext → plaintext guesses, in the order first made
    #[must_use]
    pub const fn guesses(&self) -> &ArrayMap<char, char> {
        &self.guesses
    }

    #[must_use]
    pub const fn cipher(&self) -> &CipherMap {
        &self.cipher
    }

    /// Find the first letter of the answer that is unguessed or guessed wrong
    ///
    /// Scans the answer left to right. This only looks the hint up; use
    /// [`CryptogramModel::apply_hint`] to also make the guess.
    #[must_use]
    pub fn next_hint(&self) -> Option<Hint> {
        self.answer.chars().filter(|&c| is_letter(c)).find_map(|plain| {
            let cipher = self.cipher.encrypt(plain)?;
            match self.guesses.get(&cipher) {
                Some(&guess) if guess == plain => None,
                _ => Some(Hint { cipher, plain }),
            }
        })
    }

    /// Occurrences of every letter in the encrypted text, `A` through `Z`
    #[must_use]
    pub const fn letter_frequency(&self) -> &ArrayMap<char, usize> {
        &self.frequency
    }

    fn decrypt(&self) -> String {
        self.encrypted
            .chars()
            .map(|c| {
                if is_letter(c) {
                    self.guesses.get(&c).copied().unwrap_or(UNKNOWN)
                } else {
                    c
                }
            })
            .collect()
    }

    fn notify_observers(&mut self) {
        let mut observers = std::mem::take(&mut self.observers);
        for observer in &mut observers {
            observer.on_puzzle_changed(self);
        }
        self.observers = observers;
    }
}

impl fmt::Debug for CryptogramModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CryptogramModel")
            .field("answer", &self.answer)
            .field("encrypted", &self.encrypted)
            .field("decrypted", &self.decrypted)
            .field("guesses", &self.guesses)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

fn count_letters(text: &str) -> ArrayMap<char, usize> {
    let mut counts: ArrayMap<char, usize> = ALPHABET.iter().map(|&letter| (letter, 0)).collect();
    debug_assert_eq!(counts.len(), ALPHABET_LEN);

    for c in text.chars().filter(|&c| is_letter(c)) {
        let count = counts.get(&c).copied().unwrap_or(0);
        counts.put(c, count + 1);
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotes::QuoteList;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::Cell;
    use std::rc::Rc;

    fn model(answer: &str) -> CryptogramModel {
        CryptogramModel::with_answer(answer, &mut StdRng::seed_from_u64(11))
    }

    fn cipher_at(model: &CryptogramModel, index: usize) -> char {
        model.encrypted_text().chars().nth(index).unwrap()
    }

    #[test]
    fn new_game_is_not_complete() {
        let model = model("A FRESH START");
        assert!(!model.is_complete());
        assert!(model.guesses().is_empty());
        assert_eq!(model.decrypted_text(), "? ????? ?????");
    }

    #[test]
    fn answer_is_uppercased() {
        let model = model("Hello, World");
        assert_eq!(model.answer(), "HELLO, WORLD");
    }

    #[test]
    fn encryption_keeps_non_letters_in_place() {
        let model = model("IT'S 9:30 - GO!");
        let encrypted = model.encrypted_text();

        assert_eq!(encrypted.len(), model.answer().len());
        for (plain, cipher) in model.answer().chars().zip(encrypted.chars()) {
            if is_letter(plain) {
                assert_ne!(plain, cipher);
                assert!(cipher.is_ascii_uppercase());
            } else {
                assert_eq!(plain, cipher);
            }
        }
    }

    #[test]
    fn punctuation_passes_through_decryption() {
        let mut model = model("A . ");
        let first = cipher_at(&model, 0);

        model.submit_guess(first, 'a');

        assert_eq!(model.decrypted_text(), "A . ");
        assert!(model.is_complete());
    }

    #[test]
    fn inverse_cipher_solves_the_puzzle() {
        let answers = crate::quotes::QUOTES
            .iter()
            .copied()
            .chain(["The quick brown fox jumps over the lazy dog!", "A . ", "42"]);

        for answer in answers {
            for seed in 0..8 {
                let mut model =
                    CryptogramModel::with_answer(answer, &mut StdRng::seed_from_u64(seed));
                let inverse = model.cipher().inverse();

                for (&cipher, &plain) in &inverse {
                    model.submit_guess(cipher, plain);
                }

                assert_eq!(model.decrypted_text(), model.answer(), "seed {seed}");
                assert!(model.is_complete(), "{answer:?} with seed {seed}");
            }
        }
    }

    #[test]
    fn hint_survives_wrong_guess() {
        let mut model = model("A-TEST");
        let first = cipher_at(&model, 0);
        let expected = Hint {
            cipher: first,
            plain: 'A',
        };

        assert_eq!(model.next_hint(), Some(expected));

        model.submit_guess(first, 'z');
        assert_eq!(model.next_hint(), Some(expected));

        // Mixed letter casing is accepted
        model.submit_guess(first, 'a');
        model.submit_guess(cipher_at(&model, 2), 'T');
        model.submit_guess(cipher_at(&model, 3), 'e');
        model.submit_guess(cipher_at(&model, 4), 'S');
        model.submit_guess(cipher_at(&model, 5), 't');

        assert!(model.is_complete());
        assert_eq!(model.next_hint(), None);
    }

    #[test]
    fn hint_skips_correct_guesses() {
        let mut model = model("AB");
        let a = cipher_at(&model, 0);
        let b = cipher_at(&model, 1);

        model.submit_guess(a, 'A');
        assert_eq!(model.next_hint(), Some(Hint { cipher: b, plain: 'B' }));
    }

    #[test]
    fn apply_hint_solves_one_letter_at_a_time() {
        let mut model = model("TEST");

        assert_eq!(model.apply_hint().map(|h| h.plain), Some('T'));
        assert_eq!(model.apply_hint().map(|h| h.plain), Some('E'));
        assert_eq!(model.apply_hint().map(|h| h.plain), Some('S'));
        assert!(model.is_complete());
        assert_eq!(model.apply_hint(), None);
    }

    #[test]
    fn non_letter_guesses_are_ignored() {
        let mut model = model("PUZZLE");
        let first = cipher_at(&model, 0);
        let before = model.decrypted_text().to_string();

        model.submit_guess(first, '7');
        model.submit_guess('!', 'P');
        model.submit_guess(' ', '-');

        assert!(model.guesses().is_empty());
        assert_eq!(model.decrypted_text(), before);
    }

    #[test]
    fn later_guess_replaces_earlier_one() {
        let mut model = model("ZZ");
        let z = cipher_at(&model, 0);

        model.submit_guess(z, 'q');
        assert_eq!(model.decrypted_text(), "QQ");

        model.submit_guess(z.to_ascii_lowercase(), 'z');
        assert_eq!(model.decrypted_text(), "ZZ");
        assert_eq!(model.guesses().len(), 1);
    }

    #[test]
    fn frequency_covers_whole_alphabet() {
        let model = model("Mississippi river");
        let frequency = model.letter_frequency();

        assert_eq!(frequency.len(), ALPHABET_LEN);
        let letters: Vec<char> = frequency.keys().copied().collect();
        assert_eq!(letters, ALPHABET.to_vec());

        let letter_count = model.encrypted_text().chars().filter(|&c| is_letter(c)).count();
        assert_eq!(frequency.values().sum::<usize>(), letter_count);

        let s = model.cipher().encrypt('S').unwrap();
        assert_eq!(frequency.get(&s), Some(&4));
    }

    #[test]
    fn frequency_of_letterless_quote_is_all_zero() {
        let model = model("1, 2, 3!");
        assert_eq!(model.letter_frequency().len(), ALPHABET_LEN);
        assert!(model.letter_frequency().values().all(|&count| count == 0));
        assert!(model.is_complete());
    }

    #[test]
    fn observers_see_every_change() {
        let mut model = model("OBSERVE");
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        model.subscribe(move |_: &CryptogramModel| seen.set(seen.get() + 1));

        let first = cipher_at(&model, 0);
        model.submit_guess(first, 'O');
        model.submit_guess(first, 'X');
        model.submit_guess(first, '#');

        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn observers_read_updated_state() {
        let mut model = model("GO");
        let solved = Rc::new(Cell::new(false));
        let flag = Rc::clone(&solved);
        model.subscribe(move |m: &CryptogramModel| flag.set(m.is_complete()));

        model.apply_hint();
        assert!(!solved.get());
        model.apply_hint();
        assert!(solved.get());
    }

    #[test]
    fn built_from_quote_source() {
        let mut source = QuoteList::new(vec!["only quote".to_string()]);
        let model = CryptogramModel::new(&mut source, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(model.answer(), "ONLY QUOTE");
    }

    #[test]
    fn empty_quote_source_is_fatal() {
        let mut source = QuoteList::new(Vec::new());
        let result = CryptogramModel::new(&mut source, &mut StdRng::seed_from_u64(5));
        assert!(matches!(result, Err(PuzzleError::QuoteSourceUnavailable)));
    }
}
