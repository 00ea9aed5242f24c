//! The puzzle alphabet
//!
//! Ciphers, guesses and frequency reports are all keyed by the 26 uppercase ASCII letters.

/// Number of letters in the puzzle alphabet
pub const ALPHABET_LEN: usize = 26;

/// The uppercase letters `A`..=`Z` in order
pub const ALPHABET: [char; ALPHABET_LEN] = {
    let mut letters = ['A'; ALPHABET_LEN];
    let mut i = 0;
    while i < ALPHABET_LEN {
        letters[i] = (b'A' + i as u8) as char;
        i += 1;
    }
    letters
};

/// Whether `c` takes part in the cipher
///
/// Only ASCII letters are enciphered; everything else (digits, punctuation,
/// whitespace, accented letters) passes through a puzzle unchanged.
#[inline]
#[must_use]
pub const fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Parse a single-letter token, case-insensitively
///
/// Returns the uppercase letter, or `None` if the token is not exactly one
/// alphabet letter.
///
/// # Examples
/// ```
/// use cryptograms::core::parse_letter;
///
/// assert_eq!(parse_letter("q"), Some('Q'));
/// assert_eq!(parse_letter("Q"), Some('Q'));
/// assert_eq!(parse_letter("qu"), None);
/// assert_eq!(parse_letter("7"), None);
/// ```
#[must_use]
pub fn parse_letter(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if is_letter(c) => Some(c.to_ascii_uppercase()),
        _ => None,
    }
}
